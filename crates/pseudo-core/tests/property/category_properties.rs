use proptest::prelude::*;
use pseudo_core::models::EntityCategory;

proptest! {
    #[test]
    fn bio_prefix_does_not_change_the_category(
        prefix in prop::sample::select(vec!["B-", "I-", "b-", "i-", ""]),
        label in prop::sample::select(vec!["PER", "person", "ORG", "Organization", "LOC", "location"]),
    ) {
        let bare = EntityCategory::from_label(label);
        let tagged = EntityCategory::from_label(&format!("{prefix}{label}"));
        prop_assert_eq!(bare, tagged);
        prop_assert!(tagged.is_pseudonymized());
    }

    #[test]
    fn unknown_labels_collapse_to_other(label in "[A-Z]{4,10}") {
        prop_assume!(!matches!(
            label.as_str(),
            "PERSON" | "ORGANIZATION" | "ORGANISATION" | "LOCATION"
        ));
        prop_assert_eq!(EntityCategory::from_label(&label), EntityCategory::Other);
    }

    #[test]
    fn label_parsing_never_panics(label in "\\PC{0,16}") {
        let _ = EntityCategory::from_label(&label);
    }
}
