//! HTTP protocol version encoded as `major * 10 + minor`.

use std::fmt;

use crate::protocol::MessageError;

/// The HTTP-version of a message.
///
/// The value holds both the major and minor version numbers, so HTTP/1.0 is `10`
/// and HTTP/1.1 is `11`. No validation is performed beyond this convention.
///
/// The framing predicates apply HTTP/1.1 rules to every version from `11` up and
/// HTTP/1.0 rules to every version below it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub const HTTP_09: Version = Version(9);
    pub const HTTP_10: Version = Version(10);
    pub const HTTP_11: Version = Version(11);

    /// Encodes `major.minor`, or returns `None` if the encoding does not fit a `u8`.
    #[inline]
    pub const fn new(major: u8, minor: u8) -> Option<Self> {
        match major.checked_mul(10) {
            Some(value) => match value.checked_add(minor) {
                Some(value) => Some(Self(value)),
                None => None,
            },
            None => None,
        }
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn major(self) -> u8 {
        self.0 / 10
    }

    #[inline]
    pub const fn minor(self) -> u8 {
        self.0 % 10
    }

    /// Returns true if HTTP/1.1 connection semantics apply to this version.
    #[inline]
    pub const fn is_http11_or_later(self) -> bool {
        self.0 >= Self::HTTP_11.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::HTTP_11
    }
}

impl From<u8> for Version {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Version> for u8 {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major(), self.minor())
    }
}

impl From<http::Version> for Version {
    fn from(version: http::Version) -> Self {
        match version {
            http::Version::HTTP_09 => Version::HTTP_09,
            http::Version::HTTP_10 => Version::HTTP_10,
            http::Version::HTTP_2 => Version(20),
            http::Version::HTTP_3 => Version(30),
            _ => Version::HTTP_11,
        }
    }
}

impl TryFrom<Version> for http::Version {
    type Error = MessageError;

    fn try_from(version: Version) -> Result<Self, Self::Error> {
        match version.0 {
            9 => Ok(http::Version::HTTP_09),
            10 => Ok(http::Version::HTTP_10),
            11 => Ok(http::Version::HTTP_11),
            20 => Ok(http::Version::HTTP_2),
            30 => Ok(http::Version::HTTP_3),
            _ => Err(MessageError::invalid_header(format!("unsupported http version: {version}"))),
        }
    }
}

/// Maps the minor version reported by `httparse`, which only parses HTTP/1.x.
pub(crate) fn from_httparse(minor: Option<u8>) -> Version {
    match minor {
        Some(0) => Version::HTTP_10,
        Some(minor) => Version::new(1, minor).unwrap_or_default(),
        None => Version::HTTP_11,
    }
}
