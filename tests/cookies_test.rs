use chromenet_cookies::base::neterror::NetError;
use chromenet_cookies::cookies::canonical_cookie::{CanonicalCookie, CookieVariant};
use chromenet_cookies::cookies::collection::{CookieCollection, InsertOutcome, TimestampAction};
use time::OffsetDateTime;

fn cookie(name: &str, domain: &str, path: &str) -> CanonicalCookie {
    CanonicalCookie::new(
        name.to_string(),
        "val".to_string(),
        domain.to_string(),
        path.to_string(),
        OffsetDateTime::now_utc(),
        None,
    )
    .with_version(1)
}

#[test]
fn test_strict_insert_precedence() {
    let mut jar = CookieCollection::new();

    let a = cookie("id", "x.com", "/").with_variant(CookieVariant::Plain);
    assert_eq!(jar.insert_managed(a, true), InsertOutcome::Added);
    assert_eq!(jar.len(), 1);

    // Older spec loses
    let older = cookie("id", "x.com", "/").with_variant(CookieVariant::Unknown);
    assert_eq!(jar.insert_managed(older, true), InsertOutcome::ReplacedOrRejected);
    assert_eq!(jar.len(), 1);
    assert_eq!(jar.get(0).unwrap().variant, CookieVariant::Plain);

    // Newer spec wins
    let newer = cookie("id", "x.com", "/").with_variant(CookieVariant::Rfc2109);
    assert_eq!(jar.insert_managed(newer, true), InsertOutcome::ReplacedOrRejected);
    assert_eq!(jar.len(), 1);
    assert_eq!(jar.get(0).unwrap().variant, CookieVariant::Rfc2109);
}

#[test]
fn test_remove_at_on_empty() {
    let mut jar = CookieCollection::new();
    assert!(matches!(jar.remove_at(0), Err(NetError::IndexOutOfRange)));
}

#[test]
fn test_by_name_case_insensitive_first_match() {
    let mut jar = CookieCollection::new();
    let mut first = cookie("sid", "a.example.com", "/");
    first.value = "one".to_string();
    let mut second = cookie("sid", "b.example.com", "/");
    second.value = "two".to_string();
    jar.add(first);
    jar.add(second);

    assert_eq!(jar.len(), 2);
    assert_eq!(jar.get_by_name("SID").unwrap().value, "one");
}

#[test]
fn test_version_flag_survives_removal() {
    let mut jar = CookieCollection::new();
    assert!(!jar.has_other_versions());

    jar.insert_managed(cookie("legacy", "x.com", "/").with_version(0), true);
    assert!(jar.has_other_versions());

    while !jar.is_empty() {
        jar.remove_at(0).unwrap();
    }
    assert!(jar.has_other_versions());
}

#[test]
fn test_staleness_marker() {
    let mut jar = CookieCollection::new();

    let unused = jar.timestamp(TimestampAction::SetToUnused);
    assert_eq!(jar.timestamp(TimestampAction::Check), unused);

    let max_used = jar.timestamp(TimestampAction::SetToMaxUsed);
    assert_eq!(jar.timestamp(TimestampAction::Check), max_used);
    assert!(unused < max_used);

    let before = OffsetDateTime::now_utc();
    jar.timestamp(TimestampAction::Set);
    let checked = jar.timestamp(TimestampAction::Check);
    assert!(checked >= before);
    assert!(checked < max_used);
}

#[test]
fn test_bulk_add_and_iteration_order() {
    let mut source = CookieCollection::new();
    source.add(cookie("a", "x.com", "/"));
    source.add(cookie("b", "x.com", "/"));
    source.add(cookie("c", "x.com", "/"));

    let mut target = CookieCollection::new();
    target.add(cookie("b", "x.com", "/"));
    target.try_add_collection(Some(&source)).unwrap();

    let names: Vec<_> = target.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, ["b", "a", "c"]);

    let owned: Vec<_> = target.into_iter().collect();
    assert_eq!(owned.len(), 3);
}

#[test]
fn test_index_of_then_remove_at() {
    let mut jar = CookieCollection::new();
    jar.add(cookie("a", "x.com", "/"));
    jar.add(cookie("b", "x.com", "/"));

    let idx = jar.index_of(&cookie("b", "X.COM", "/")).unwrap();
    let removed = jar.remove_at(idx).unwrap();
    assert_eq!(removed.name, "b");
    assert!(jar.index_of(&removed).is_none());
}
