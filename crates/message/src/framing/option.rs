use std::fmt;

use tracing::warn;

use crate::ensure;
use crate::protocol::{MessageError, Version};

/// Connection intent passed to [`prepare`](crate::framing::prepare).
///
/// These are intents, not field values: [`ConnectionOption::KeepAlive`] on an
/// HTTP/1.1 message writes nothing because keep-alive is already the default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionOption {
    /// Close the connection after this message.
    Close,
    /// Keep the connection open after this message.
    KeepAlive,
    /// Ask to switch protocols. Requires HTTP/1.1.
    Upgrade,
}

impl ConnectionOption {
    /// Returns the `Connection` token this option corresponds to.
    pub fn token(self) -> &'static str {
        match self {
            ConnectionOption::Close => "close",
            ConnectionOption::KeepAlive => "keep-alive",
            ConnectionOption::Upgrade => "upgrade",
        }
    }
}

impl fmt::Display for ConnectionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A validated set of connection options.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct Intent {
    pub(crate) close: bool,
    pub(crate) keep_alive: bool,
    pub(crate) upgrade: bool,
}

impl Intent {
    /// Collapses the options, rejecting combinations that contradict each other
    /// or the protocol version. Repeating an option is allowed.
    pub(crate) fn from_options(options: &[ConnectionOption], version: Version) -> Result<Self, MessageError> {
        let mut intent = Intent::default();
        for option in options {
            match option {
                ConnectionOption::Close => intent.close = true,
                ConnectionOption::KeepAlive => intent.keep_alive = true,
                ConnectionOption::Upgrade => intent.upgrade = true,
            }
        }

        if intent.close && intent.keep_alive {
            warn!(?options, "conflicting connection options");
            return Err(MessageError::invalid_argument("close and keep-alive are mutually exclusive"));
        }

        ensure!(
            !intent.upgrade || version.is_http11_or_later(),
            MessageError::invalid_argument(format!("upgrade requires HTTP/1.1, got {version}"))
        );

        Ok(intent)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        !self.close && !self.keep_alive && !self.upgrade
    }
}
