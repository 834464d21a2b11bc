//! Body size reporting.
//!
//! The framing of a message depends only on whether the exact serialized size of
//! its body is known ahead of time. [`BodySize`] answers exactly that question and
//! must agree with whatever serializer eventually writes the body, otherwise the
//! prepared `Content-Length` is wrong.
//!
//! Implementations are provided for the common in-memory body types, for the
//! bodies of `http-body-util`, and through [`SizeHinted`] for any
//! [`http_body::Body`] that reports an exact size hint. [`UnknownSize`] forces
//! chunked framing for a body whose size should not be trusted.

use bytes::{Buf, Bytes};
use http_body_util::{Empty, Full};

/// Reports the exact number of octets a body serializes to.
pub trait BodySize {
    /// Returns the serialized size, or `None` if it is not known ahead of time.
    ///
    /// `Some(0)` means the body is known to be empty.
    fn size(&self) -> Option<u64>;
}

/// The empty body.
impl BodySize for () {
    fn size(&self) -> Option<u64> {
        Some(0)
    }
}

impl BodySize for str {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl BodySize for [u8] {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl BodySize for String {
    fn size(&self) -> Option<u64> {
        self.as_str().size()
    }
}

impl BodySize for Vec<u8> {
    fn size(&self) -> Option<u64> {
        self.as_slice().size()
    }
}

impl BodySize for Bytes {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl<T: BodySize + ?Sized> BodySize for &T {
    fn size(&self) -> Option<u64> {
        (**self).size()
    }
}

impl<T: BodySize + ?Sized> BodySize for Box<T> {
    fn size(&self) -> Option<u64> {
        (**self).size()
    }
}

/// An absent body is empty.
impl<T: BodySize> BodySize for Option<T> {
    fn size(&self) -> Option<u64> {
        match self {
            Some(body) => body.size(),
            None => Some(0),
        }
    }
}

impl<D: Buf> BodySize for Full<D> {
    fn size(&self) -> Option<u64> {
        http_body::Body::size_hint(self).exact()
    }
}

impl<D> BodySize for Empty<D> {
    fn size(&self) -> Option<u64> {
        Some(0)
    }
}

/// Adapts any [`http_body::Body`], trusting its size hint only when it is exact.
#[derive(Debug, Clone, Default)]
pub struct SizeHinted<B>(pub B);

impl<B: http_body::Body> BodySize for SizeHinted<B> {
    fn size(&self) -> Option<u64> {
        self.0.size_hint().exact()
    }
}

/// Wraps a body whose size is never reported, which forces chunked framing.
#[derive(Debug, Clone, Default)]
pub struct UnknownSize<B>(pub B);

impl<B> BodySize for UnknownSize<B> {
    fn size(&self) -> Option<u64> {
        None
    }
}
