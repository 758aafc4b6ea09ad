//! Sources for the current host name
//!
//! The player only loads when embedded on an approved parent domain. When no
//! parent list is given, the host serving the page is used instead. These
//! types let callers say where that host comes from.

/// Something that may know the host name the page is served from
pub trait HostEnvironment {
    /// The current host name, if there is one
    fn current_host(&self) -> Option<&str>;
}

/// Environment with no host, e.g. server-side rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHost;

impl HostEnvironment for NoHost {
    fn current_host(&self) -> Option<&str> {
        None
    }
}

/// Environment with a fixed, known host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHost {
    host: String,
}

impl StaticHost {
    /// Create an environment reporting the given host
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl HostEnvironment for StaticHost {
    fn current_host(&self) -> Option<&str> {
        Some(&self.host)
    }
}
