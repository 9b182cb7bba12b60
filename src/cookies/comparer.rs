//! Cookie identity predicates.
//!
//! A [`CookieCollection`](super::collection::CookieCollection) never decides on
//! its own whether two cookies are "the same"; it asks an injected
//! [`CookieComparer`]. The default, [`CanonicalComparer`], follows RFC 6265
//! identity: name, domain and path.

use crate::cookies::canonical_cookie::CanonicalCookie;

/// Decides whether two cookies name the same logical cookie.
pub trait CookieComparer {
    /// Identity used by plain insertion and lookup.
    fn same_identity(&self, a: &CanonicalCookie, b: &CanonicalCookie) -> bool;

    /// Identity used by strict (protocol-aware) insertion.
    ///
    /// Also requires matching RFC 2965 port lists.
    fn same_strict_identity(&self, a: &CanonicalCookie, b: &CanonicalCookie) -> bool {
        self.same_identity(a, b) && a.ports == b.ports
    }
}

impl<F> CookieComparer for F
where
    F: Fn(&CanonicalCookie, &CanonicalCookie) -> bool,
{
    fn same_identity(&self, a: &CanonicalCookie, b: &CanonicalCookie) -> bool {
        self(a, b)
    }
}

/// Default comparer.
///
/// - name: ASCII case-insensitive
/// - domain: ASCII case-insensitive, one leading dot ignored
/// - path: exact
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalComparer;

impl CookieComparer for CanonicalComparer {
    fn same_identity(&self, a: &CanonicalCookie, b: &CanonicalCookie) -> bool {
        a.name.eq_ignore_ascii_case(&b.name)
            && domain_key(&a.domain).eq_ignore_ascii_case(domain_key(&b.domain))
            && a.path == b.path
    }
}

fn domain_key(domain: &str) -> &str {
    domain.strip_prefix('.').unwrap_or(domain)
}
