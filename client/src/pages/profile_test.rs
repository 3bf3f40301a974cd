use super::*;

#[test]
fn experience_label_pluralizes() {
    assert_eq!(experience_label(0), "0 years");
    assert_eq!(experience_label(1), "1 year");
    assert_eq!(experience_label(15), "15 years");
}

#[test]
fn missing_fields_read_not_specified() {
    assert_eq!(or_not_specified(None), "Not specified");
    assert_eq!(or_not_specified(Some(&"Mumbai".to_owned())), "Mumbai");
}

#[test]
fn tabs_keep_display_order() {
    let labels: Vec<_> = ProfileTab::ALL.into_iter().map(ProfileTab::label).collect();
    assert_eq!(labels, vec!["Profile Information", "Security", "Recent Activity"]);
}
