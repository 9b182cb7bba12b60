use time::OffsetDateTime;

/// Highest cookie `Version` attribute understood by this crate (RFC 2965).
pub const MAX_SUPPORTED_VERSION: u32 = 1;

/// Represents a cookie.
/// Modeled after Chromium's `net::CanonicalCookie`, extended with the
/// RFC 2109/2965 `Version` and `Port` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// RFC 2965 `Port` list. Empty when the attribute was not sent.
    pub ports: Vec<u16>,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub host_only: bool,
    /// `Version` attribute; 0 for Netscape-style cookies.
    pub version: u32,
    pub variant: CookieVariant,
}

/// The specification a cookie was defined under.
///
/// Ordered by precedence: a later spec supersedes an earlier one when two
/// cookies with the same identity collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CookieVariant {
    Unknown,
    /// Netscape draft.
    Plain,
    Rfc2109,
    #[default]
    Rfc2965,
}

impl CookieVariant {
    /// Numeric precedence rank, `Unknown` = 0 through `Rfc2965` = 3.
    pub fn rank(self) -> u8 {
        match self {
            CookieVariant::Unknown => 0,
            CookieVariant::Plain => 1,
            CookieVariant::Rfc2109 => 2,
            CookieVariant::Rfc2965 => 3,
        }
    }
}

impl CanonicalCookie {
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        creation_time: OffsetDateTime,
        expiration_time: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            ports: Vec::new(),
            creation_time,
            expiration_time,
            secure: false,
            http_only: false,
            host_only: true, // Default to host-only if not specified
            version: 0,
            variant: CookieVariant::default(),
        }
    }

    /// Set the `Version` attribute.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Set the defining specification.
    pub fn with_variant(mut self, variant: CookieVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the RFC 2965 port list.
    pub fn with_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.ports = ports.into_iter().collect();
        self
    }

    /// Whether the cookie carries a version other than `max_supported`.
    pub fn has_non_default_version(&self, max_supported: u32) -> bool {
        self.version != max_supported
    }
}
