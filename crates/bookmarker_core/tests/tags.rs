use bookmarker_core::TagSet;

#[test]
fn from_delimited_trims_and_drops_empty_parts() {
    let tags = TagSet::from_delimited(" rust ,, web dev ,  ,tools");
    assert_eq!(tags.to_vec(), vec!["rust", "web dev", "tools"]);
}

#[test]
fn from_delimited_on_garbage_yields_empty_set() {
    assert!(TagSet::from_delimited("").is_empty());
    assert!(TagSet::from_delimited(" , ,, ").is_empty());
    assert_eq!(TagSet::from_delimited(",,,").len(), 0);
}

#[test]
fn round_trip_preserves_members_and_order() {
    let tags = TagSet::from_delimited("a,b,c,b");
    assert_eq!(tags.to_delimited(), "a,b,c,b");
    assert_eq!(TagSet::from_delimited(&tags.to_delimited()), tags);
}

#[test]
fn add_trims_and_appends_at_the_end() {
    let mut tags = TagSet::from_delimited("one,two");
    assert!(tags.add("  three "));
    assert_eq!(tags.to_delimited(), "one,two,three");
}

#[test]
fn add_of_whitespace_only_is_a_noop() {
    let mut tags = TagSet::new();
    assert!(!tags.add(""));
    assert!(!tags.add("   "));
    assert!(tags.is_empty());
}

#[test]
fn add_keeps_duplicates() {
    let mut tags = TagSet::from_delimited("demo");
    assert!(tags.add("demo"));
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.to_delimited(), "demo,demo");
}

#[test]
fn remove_deletes_all_occurrences_in_one_call() {
    let mut tags = TagSet::from_delimited("a,b,a,c,a");
    assert!(tags.remove("a"));
    assert_eq!(tags.to_delimited(), "b,c");
    assert!(!tags.remove("a"));
}

#[test]
fn remove_matches_on_trimmed_equality() {
    let mut tags = TagSet::from_delimited("demo,test");
    assert!(tags.remove("  demo "));
    assert_eq!(tags.to_delimited(), "test");
}

#[test]
fn remove_then_add_leaves_one_occurrence_at_the_end() {
    let mut tags = TagSet::from_delimited("x,y,z");
    tags.remove("x");
    tags.add("x");
    assert_eq!(tags.to_delimited(), "y,z,x");
    assert_eq!(tags.iter().filter(|tag| *tag == "x").count(), 1);
}

#[test]
fn from_list_applies_the_same_rules_as_from_delimited() {
    let tags = TagSet::from_list(["  demo ", "", "test", "   "]);
    assert_eq!(tags.to_vec(), vec!["demo", "test"]);
    assert_eq!(tags, TagSet::from_delimited("demo,test"));
}
