//! Recognized HTTP request methods.

use std::fmt;

/// A recognized request method, or [`Verb::Unknown`].
///
/// Method names are case-sensitive: `"get"` is not [`Verb::Get`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Any method this crate does not recognize.
    #[default]
    Unknown,

    Delete,
    Get,
    Head,
    Post,
    Put,
    Connect,
    Options,
    Trace,

    // WebDAV
    Copy,
    Lock,
    Mkcol,
    Move,
    Propfind,
    Proppatch,
    Search,
    Unlock,
    Bind,
    Rebind,
    Unbind,
    Acl,

    // subversion
    Report,
    Mkactivity,
    Checkout,
    Merge,

    // upnp
    MSearch,
    Notify,
    Subscribe,
    Unsubscribe,

    // RFC-5789
    Patch,
    Purge,

    // CalDAV
    Mkcalendar,

    // RFC-2068, section 19.6.1.2
    Link,
    Unlink,
}

impl Verb {
    /// Classifies a method string, returning [`Verb::Unknown`] if it is not recognized.
    pub fn parse(s: &str) -> Verb {
        match s {
            "DELETE" => Verb::Delete,
            "GET" => Verb::Get,
            "HEAD" => Verb::Head,
            "POST" => Verb::Post,
            "PUT" => Verb::Put,
            "CONNECT" => Verb::Connect,
            "OPTIONS" => Verb::Options,
            "TRACE" => Verb::Trace,
            "COPY" => Verb::Copy,
            "LOCK" => Verb::Lock,
            "MKCOL" => Verb::Mkcol,
            "MOVE" => Verb::Move,
            "PROPFIND" => Verb::Propfind,
            "PROPPATCH" => Verb::Proppatch,
            "SEARCH" => Verb::Search,
            "UNLOCK" => Verb::Unlock,
            "BIND" => Verb::Bind,
            "REBIND" => Verb::Rebind,
            "UNBIND" => Verb::Unbind,
            "ACL" => Verb::Acl,
            "REPORT" => Verb::Report,
            "MKACTIVITY" => Verb::Mkactivity,
            "CHECKOUT" => Verb::Checkout,
            "MERGE" => Verb::Merge,
            "M-SEARCH" => Verb::MSearch,
            "NOTIFY" => Verb::Notify,
            "SUBSCRIBE" => Verb::Subscribe,
            "UNSUBSCRIBE" => Verb::Unsubscribe,
            "PATCH" => Verb::Patch,
            "PURGE" => Verb::Purge,
            "MKCALENDAR" => Verb::Mkcalendar,
            "LINK" => Verb::Link,
            "UNLINK" => Verb::Unlink,
            _ => Verb::Unknown,
        }
    }

    /// Returns the method name, or `"<unknown>"` for [`Verb::Unknown`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Unknown => "<unknown>",
            Verb::Delete => "DELETE",
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Connect => "CONNECT",
            Verb::Options => "OPTIONS",
            Verb::Trace => "TRACE",
            Verb::Copy => "COPY",
            Verb::Lock => "LOCK",
            Verb::Mkcol => "MKCOL",
            Verb::Move => "MOVE",
            Verb::Propfind => "PROPFIND",
            Verb::Proppatch => "PROPPATCH",
            Verb::Search => "SEARCH",
            Verb::Unlock => "UNLOCK",
            Verb::Bind => "BIND",
            Verb::Rebind => "REBIND",
            Verb::Unbind => "UNBIND",
            Verb::Acl => "ACL",
            Verb::Report => "REPORT",
            Verb::Mkactivity => "MKACTIVITY",
            Verb::Checkout => "CHECKOUT",
            Verb::Merge => "MERGE",
            Verb::MSearch => "M-SEARCH",
            Verb::Notify => "NOTIFY",
            Verb::Subscribe => "SUBSCRIBE",
            Verb::Unsubscribe => "UNSUBSCRIBE",
            Verb::Patch => "PATCH",
            Verb::Purge => "PURGE",
            Verb::Mkcalendar => "MKCALENDAR",
            Verb::Link => "LINK",
            Verb::Unlink => "UNLINK",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&http::Method> for Verb {
    fn from(method: &http::Method) -> Self {
        Verb::parse(method.as_str())
    }
}
