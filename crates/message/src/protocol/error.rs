use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("message has already been prepared")]
    AlreadyPrepared,

    #[error("invalid header: {reason}")]
    InvalidHeader { reason: String },
}

impl MessageError {
    pub fn invalid_argument<S: ToString>(str: S) -> Self {
        Self::InvalidArgument { reason: str.to_string() }
    }

    pub fn invalid_header<S: ToString>(str: S) -> Self {
        Self::InvalidHeader { reason: str.to_string() }
    }

    /// Returns true if this error reports a contract violation by the caller.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MessageError::InvalidArgument { .. })
    }
}
