//! Cookie types and per-domain cookie storage.
//!
//! # Architecture
//!
//! This implementation mirrors the cookie-list layer that sits under a
//! browser cookie jar:
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CanonicalCookie`](canonical_cookie::CanonicalCookie) | Single cookie representation |
//! | [`CookieComparer`](comparer::CookieComparer) | Identity predicate (name, domain, path) |
//! | [`CookieCollection`](collection::CookieCollection) | Ordered, deduplicated cookie list with staleness marker |
//! | [`CollectionConfig`](config::CollectionConfig) | Reference version and preallocation |
//!
//! Expiration, domain matching and eviction belong to the owning jar. The
//! collection only exposes the hooks it needs: [`timestamp`] for staleness
//! tagging and [`has_other_versions`] for protocol fallbacks.
//!
//! [`timestamp`]: collection::CookieCollection::timestamp
//! [`has_other_versions`]: collection::CookieCollection::has_other_versions

pub mod canonical_cookie;
pub mod collection;
pub mod comparer;
pub mod config;
