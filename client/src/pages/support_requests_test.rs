use super::*;

#[test]
fn tabs_start_with_all_then_each_category() {
    let labels: Vec<_> = request_tabs().into_iter().map(|(_, label)| label).collect();
    assert_eq!(labels, vec!["All Requests", "Financial", "Medical", "Legal", "Other"]);
    assert_eq!(request_tabs()[0].0, CategoryFilter::All);
}

#[test]
fn empty_message_names_the_category() {
    assert_eq!(empty_message(CategoryFilter::All), "No support requests found");
    assert_eq!(
        empty_message(CategoryFilter::Only(RequestCategory::Medical)),
        "No medical support requests found"
    );
}
