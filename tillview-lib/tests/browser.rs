//! Scenario tests for the list browser engine.

use tillview_lib::{BrowseError, ListBrowser, ListRecord};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: String,
    category: String,
}

impl ListRecord for Row {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn row(id: u32, name: &str, category: &str) -> Row {
    Row {
        id,
        name: name.to_string(),
        category: category.to_string(),
    }
}

fn rows(count: u32) -> Vec<Row> {
    (1..=count)
        .map(|id| {
            let category = if id % 3 == 0 { "red" } else { "blue" };
            row(id, &format!("row {id}"), category)
        })
        .collect()
}

fn browser_with(count: u32) -> ListBrowser<Row> {
    let mut browser = ListBrowser::new()
        .with_search_field(|r: &Row| r.name.clone())
        .with_search_field(|r: &Row| r.category.clone());
    browser.replace_records(rows(count));
    browser
}

#[test]
fn test_replace_records_resets_current_page() {
    let mut browser = browser_with(50);
    browser.set_current_page(4);
    assert_eq!(browser.current_page(), 4);

    browser.replace_records(rows(50));
    assert_eq!(browser.current_page(), 1);
}

#[test]
fn test_replace_records_prunes_stale_selection() {
    let mut browser = browser_with(5);
    browser.toggle_selection(1);
    browser.toggle_selection(2);
    browser.toggle_selection(3);

    browser.replace_records(vec![row(2, "two", "blue"), row(4, "four", "blue")]);

    assert_eq!(browser.selection().len(), 1);
    assert!(browser.is_selected(&2));
    assert!(!browser.is_selected(&1));
    assert!(!browser.is_selected(&3));
}

#[test]
fn test_window_near_last_page() {
    let mut browser = browser_with(100);
    browser.set_page_size(10).unwrap();
    browser.set_current_page(9);

    assert_eq!(browser.total_pages(), 10);
    assert_eq!(browser.page_window(4), vec![7, 8, 9, 10]);
}

#[test]
fn test_empty_filtered_set() {
    let mut browser = browser_with(20);
    browser.set_current_page(2);
    browser.set_criterion("none", |_: &Row| false);

    assert_eq!(browser.total_pages(), 0);
    assert!(browser.page_records().is_empty());
    assert_eq!(browser.current_page(), 1);
    assert!(browser.page_window(5).is_empty());
    assert!(browser.is_empty());
}

#[test]
fn test_filter_shrinking_set_forces_page_back() {
    // 12 records, page size 5, sitting on page 3; a filter leaving 5
    // records collapses to a single page.
    let mut browser = browser_with(12);
    browser.set_page_size(5).unwrap();
    browser.set_current_page(3);
    assert_eq!(browser.current_page(), 3);

    browser.set_criterion("first-five", |r: &Row| r.id <= 5);

    assert_eq!(browser.filtered_len(), 5);
    assert_eq!(browser.total_pages(), 1);
    assert_eq!(browser.current_page(), 1);
}

#[test]
fn test_page_size_zero_rejected_and_state_unchanged() {
    let mut browser = browser_with(12);
    browser.set_page_size(5).unwrap();
    browser.set_current_page(2);
    let page_before: Vec<u32> = browser.page_records().iter().map(|r| r.id).collect();

    let err = browser.set_page_size(0).unwrap_err();
    assert_eq!(
        err,
        BrowseError::invalid_argument("page size must be at least 1")
    );

    assert_eq!(browser.page_size(), 5);
    assert_eq!(browser.current_page(), 2);
    let page_after: Vec<u32> = browser.page_records().iter().map(|r| r.id).collect();
    assert_eq!(page_before, page_after);
}

#[test]
fn test_shrinking_page_size_reclamps_current_page() {
    let mut browser = browser_with(20);
    browser.set_page_size(5).unwrap();
    browser.set_current_page(4);

    browser.set_page_size(10).unwrap();
    assert_eq!(browser.total_pages(), 2);
    assert_eq!(browser.current_page(), 2);
}

#[test]
fn test_out_of_range_navigation_clamps_silently() {
    let mut browser = browser_with(20);
    browser.set_page_size(5).unwrap();

    browser.set_current_page(99);
    assert_eq!(browser.current_page(), 4);

    browser.set_current_page(0);
    assert_eq!(browser.current_page(), 1);

    browser.previous_page();
    assert_eq!(browser.current_page(), 1);

    browser.last_page();
    browser.next_page();
    assert_eq!(browser.current_page(), 4);
}

#[test]
fn test_set_current_page_is_idempotent() {
    let mut browser = browser_with(37);
    browser.set_page_size(5).unwrap();

    browser.set_current_page(3);
    let first: Vec<u32> = browser.page_records().iter().map(|r| r.id).collect();
    browser.set_current_page(3);
    let second: Vec<u32> = browser.page_records().iter().map(|r| r.id).collect();

    assert_eq!(first, second);
}

#[test]
fn test_selection_persists_across_filter_and_page_changes() {
    let mut browser = browser_with(30);
    browser.set_page_size(5).unwrap();
    browser.toggle_selection(3);
    browser.toggle_selection(17);

    browser.set_criterion("red", |r: &Row| r.category == "red");
    browser.next_page();

    assert!(browser.is_selected(&3));
    assert!(browser.is_selected(&17));
}

#[test]
fn test_criteria_combine_with_search() {
    let mut browser = browser_with(30);
    browser.set_criterion("red", |r: &Row| r.category == "red");
    // Multiples of 3 up to 30: 10 records.
    assert_eq!(browser.filtered_len(), 10);

    browser.set_search_text("row 2");
    // Of "row 21", "row 24", "row 27" (and "row 2" itself is blue).
    assert_eq!(browser.filtered_len(), 3);

    browser.clear_criterion("red");
    // "row 2", "row 20".."row 29": 11 records.
    assert_eq!(browser.filtered_len(), 11);
}

#[test]
fn test_page_records_subset_of_filtered() {
    let mut browser = browser_with(23);
    browser.set_page_size(7).unwrap();
    browser.set_criterion("blue", |r: &Row| r.category == "blue");

    for page in 1..=browser.total_pages() {
        browser.set_current_page(page);
        let records = browser.page_records();
        assert!(records.len() <= browser.page_size());
        for record in records {
            assert_eq!(record.category, "blue");
        }
    }
}
