//! Ordered, identity-deduplicated cookie list.
//!
//! [`CookieCollection`] is the per-domain bucket a cookie jar hands cookies
//! to. It keeps insertion order, holds at most one cookie per identity, and
//! carries a staleness marker the owning jar uses for eviction bookkeeping.
//!
//! ```rust
//! use chromenet_cookies::cookies::canonical_cookie::{CanonicalCookie, CookieVariant};
//! use chromenet_cookies::cookies::collection::{CookieCollection, InsertOutcome};
//! use time::OffsetDateTime;
//!
//! let make = |variant| {
//!     CanonicalCookie::new(
//!         "id".to_string(),
//!         "v".to_string(),
//!         "x.com".to_string(),
//!         "/".to_string(),
//!         OffsetDateTime::now_utc(),
//!         None,
//!     )
//!     .with_variant(variant)
//! };
//!
//! let mut cookies = CookieCollection::new();
//! assert_eq!(cookies.insert_managed(make(CookieVariant::Plain), true), InsertOutcome::Added);
//! // An older spec never displaces a newer one.
//! cookies.insert_managed(make(CookieVariant::Unknown), true);
//! assert_eq!(cookies.len(), 1);
//! assert_eq!(cookies.get(0)?.variant, CookieVariant::Plain);
//! # Ok::<(), chromenet_cookies::base::neterror::NetError>(())
//! ```

use crate::base::neterror::NetError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::comparer::{CanonicalComparer, CookieComparer};
use crate::cookies::config::CollectionConfig;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Staleness marker transitions, see [`CookieCollection::timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampAction {
    /// Read the marker.
    Check,
    /// Mark as touched now.
    Set,
    /// Force the marker to the earliest representable time.
    SetToUnused,
    /// Force the marker to the latest representable time.
    SetToMaxUsed,
}

/// Result of [`CookieCollection::insert_managed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The cookie was appended.
    Added,
    /// An entry with the same identity existed. The candidate either replaced
    /// it or was dropped; callers are not told which.
    ReplacedOrRejected,
}

/// An ordered list of cookies with at most one entry per identity.
///
/// Not synchronized: owners sharing a collection across threads must wrap it
/// themselves. Iteration borrows the collection, so it cannot be mutated
/// while an iterator is live; use [`snapshot`](Self::snapshot) for a detached
/// copy.
#[derive(Debug, Clone)]
pub struct CookieCollection<C = CanonicalComparer> {
    entries: Vec<CanonicalCookie>,
    staleness: OffsetDateTime,
    // Sticky: only ever goes false -> true.
    seen_non_default_version: bool,
    comparer: C,
    config: CollectionConfig,
}

impl Default for CookieCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieCollection {
    pub fn new() -> Self {
        Self::with_config(CollectionConfig::default())
    }

    pub fn with_config(config: CollectionConfig) -> Self {
        Self::with_config_and_comparer(config, CanonicalComparer)
    }
}

impl<C: CookieComparer> CookieCollection<C> {
    /// Create an empty collection using a custom identity predicate.
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_config_and_comparer(CollectionConfig::default(), comparer)
    }

    pub fn with_config_and_comparer(config: CollectionConfig, comparer: C) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            staleness: earliest(),
            seen_non_default_version: false,
            comparer,
            config,
        }
    }

    /// Add a cookie, replacing any entry with the same identity in place.
    ///
    /// Last write wins; variants are not consulted.
    pub fn add(&mut self, cookie: CanonicalCookie) {
        match self.index_of(&cookie) {
            Some(idx) => {
                tracing::trace!(name = %cookie.name, domain = %cookie.domain, index = idx, "replacing cookie");
                self.entries[idx] = cookie;
            }
            None => {
                tracing::trace!(name = %cookie.name, domain = %cookie.domain, "appending cookie");
                self.entries.push(cookie);
            }
        }
    }

    /// [`add`](Self::add) for owners holding an optional cookie.
    pub fn try_add(&mut self, cookie: Option<CanonicalCookie>) -> Result<(), NetError> {
        let cookie = cookie.ok_or(NetError::NullInput)?;
        self.add(cookie);
        Ok(())
    }

    /// Add every cookie of `other`, in its order.
    pub fn add_collection<D>(&mut self, other: &CookieCollection<D>) {
        for cookie in other.iter() {
            self.add(cookie.clone());
        }
    }

    /// [`add_collection`](Self::add_collection) for an optional source.
    pub fn try_add_collection<D>(
        &mut self,
        other: Option<&CookieCollection<D>>,
    ) -> Result<(), NetError> {
        let other = other.ok_or(NetError::NullInput)?;
        self.add_collection(other);
        Ok(())
    }

    /// Insert with cookie-protocol replacement rules.
    ///
    /// Non-strict insertion appends unconditionally. Strict insertion looks
    /// for an entry with the same strict identity; if one exists it is
    /// replaced only when its variant is not newer than the candidate's.
    ///
    /// A version other than the configured max supported version marks the
    /// collection as having seen other versions, whether or not the
    /// candidate was kept.
    pub fn insert_managed(&mut self, cookie: CanonicalCookie, strict: bool) -> InsertOutcome {
        let non_default = cookie.has_non_default_version(self.config.max_supported_version);

        let outcome = if strict {
            let existing = self
                .entries
                .iter()
                .position(|c| self.comparer.same_strict_identity(c, &cookie));

            match existing {
                Some(idx) => {
                    if self.entries[idx].variant <= cookie.variant {
                        tracing::trace!(name = %cookie.name, index = idx, variant = ?cookie.variant, "superseding cookie");
                        self.entries[idx] = cookie;
                    } else {
                        tracing::debug!(
                            name = %cookie.name,
                            existing = ?self.entries[idx].variant,
                            candidate = ?cookie.variant,
                            "rejecting cookie from older spec"
                        );
                    }
                    InsertOutcome::ReplacedOrRejected
                }
                None => {
                    self.entries.push(cookie);
                    InsertOutcome::Added
                }
            }
        } else {
            self.entries.push(cookie);
            InsertOutcome::Added
        };

        if non_default && !self.seen_non_default_version {
            tracing::debug!("collection saw a non-default cookie version");
            self.seen_non_default_version = true;
        }

        outcome
    }

    /// Cookie at `index`.
    pub fn get(&self, index: usize) -> Result<&CanonicalCookie, NetError> {
        self.entries
            .get(index)
            .ok_or_else(|| out_of_range(index, self.entries.len()))
    }

    /// First cookie whose name matches, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<&CanonicalCookie> {
        self.entries.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Remove and return the cookie at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Result<CanonicalCookie, NetError> {
        if index >= self.entries.len() {
            return Err(out_of_range(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    /// Remove the first entry with the same identity as `cookie`.
    pub fn remove(&mut self, cookie: &CanonicalCookie) -> bool {
        match self.index_of(cookie) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Position of the first entry with the same identity as `cookie`.
    pub fn index_of(&self, cookie: &CanonicalCookie) -> Option<usize> {
        self.entries
            .iter()
            .position(|c| self.comparer.same_identity(c, cookie))
    }

    pub fn contains(&self, cookie: &CanonicalCookie) -> bool {
        self.index_of(cookie).is_some()
    }

    /// Drop all entries. The staleness marker and version flag are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply a staleness transition and return the resulting marker.
    pub fn timestamp(&mut self, action: TimestampAction) -> OffsetDateTime {
        match action {
            TimestampAction::Check => {}
            TimestampAction::Set => self.staleness = OffsetDateTime::now_utc(),
            TimestampAction::SetToUnused => self.staleness = earliest(),
            TimestampAction::SetToMaxUsed => self.staleness = latest(),
        }
        self.staleness
    }

    /// Whether a cookie with a non-default version was ever inserted through
    /// [`insert_managed`](Self::insert_managed).
    pub fn has_other_versions(&self) -> bool {
        self.seen_non_default_version
    }
}

impl<C> CookieCollection<C> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Always false.
    pub fn is_read_only(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalCookie> {
        self.entries.iter()
    }

    /// Owned copy of the entries, independent of later mutation.
    pub fn snapshot(&self) -> Vec<CanonicalCookie> {
        self.entries.clone()
    }

    /// Append clones of all entries to `buffer`, in order.
    pub fn copy_to(&self, buffer: &mut Vec<CanonicalCookie>) {
        buffer.extend_from_slice(&self.entries);
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }
}

impl<'a, C> IntoIterator for &'a CookieCollection<C> {
    type Item = &'a CanonicalCookie;
    type IntoIter = std::slice::Iter<'a, CanonicalCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<C> IntoIterator for CookieCollection<C> {
    type Item = CanonicalCookie;
    type IntoIter = std::vec::IntoIter<CanonicalCookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<C: CookieComparer> Extend<CanonicalCookie> for CookieCollection<C> {
    fn extend<I: IntoIterator<Item = CanonicalCookie>>(&mut self, iter: I) {
        for cookie in iter {
            self.add(cookie);
        }
    }
}

impl FromIterator<CanonicalCookie> for CookieCollection {
    fn from_iter<I: IntoIterator<Item = CanonicalCookie>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

fn earliest() -> OffsetDateTime {
    PrimitiveDateTime::MIN.assume_utc()
}

fn latest() -> OffsetDateTime {
    PrimitiveDateTime::MAX.assume_utc()
}

fn out_of_range(index: usize, count: usize) -> NetError {
    tracing::debug!(index, count, "cookie index out of range");
    NetError::IndexOutOfRange
}
