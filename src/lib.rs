//! # chromenet-cookies
//!
//! Chromium-inspired cookie storage primitives for Rust HTTP clients.
//!
//! The crate provides the per-domain cookie list a cookie jar is built on:
//! an ordered collection holding at most one cookie per (name, domain, path)
//! identity, with RFC 2109/2965 aware replacement and a staleness marker for
//! the jar's eviction bookkeeping.
//!
//! ## Quick Start
//!
//! ```rust
//! use chromenet_cookies::cookies::canonical_cookie::CanonicalCookie;
//! use chromenet_cookies::cookies::collection::{CookieCollection, TimestampAction};
//! use time::OffsetDateTime;
//!
//! let mut cookies = CookieCollection::new();
//! cookies.add(CanonicalCookie::new(
//!     "session".to_string(),
//!     "abc123".to_string(),
//!     "example.com".to_string(),
//!     "/".to_string(),
//!     OffsetDateTime::now_utc(),
//!     None,
//! ));
//! cookies.timestamp(TimestampAction::Set);
//!
//! assert_eq!(cookies.get_by_name("SESSION").map(|c| c.value.as_str()), Some("abc123"));
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`cookies`] - Cookie representation, identity comparison, and storage
//!
//! ## Thread Safety
//!
//! [`CookieCollection`](cookies::collection::CookieCollection) performs no
//! internal locking. Owners sharing one across threads synchronize externally.

pub mod base;
pub mod cookies;
