use rgiras::core::pagination::Page;

#[test]
fn first_page_and_footer() {
    let items: Vec<u32> = (1..=25).collect();
    let p = Page::of(&items, 1, 10);
    assert_eq!(p.items, (1..=10).collect::<Vec<_>>());
    assert_eq!(p.total_pages, 3);
    assert!(p.has_next());
    assert_eq!(p.range_label(), "1-10 of 25");
}

#[test]
fn last_page_is_partial() {
    let items: Vec<u32> = (1..=25).collect();
    let p = Page::of(&items, 3, 10);
    assert_eq!(p.items, vec![21, 22, 23, 24, 25]);
    assert!(!p.has_next());
    assert_eq!(p.range_label(), "21-25 of 25");
}

#[test]
fn page_past_the_end_is_empty() {
    let items: Vec<u32> = (1..=5).collect();
    let p = Page::of(&items, 4, 10);
    assert!(p.is_empty());
    assert_eq!(p.total, 5);
    assert_eq!(p.range_label(), "0 of 5");
}

#[test]
fn zero_page_and_zero_size_are_clamped() {
    let items = vec!["a", "b", "c"];
    let p = Page::of(&items, 0, 0);
    assert_eq!(p.page, 1);
    assert_eq!(p.per_page, 1);
    assert_eq!(p.items, vec!["a"]);
    assert_eq!(p.total_pages, 3);
}

#[test]
fn empty_list_has_no_pages() {
    let items: Vec<u32> = Vec::new();
    let p = Page::of(&items, 1, 10);
    assert_eq!(p.total_pages, 0);
    assert!(p.is_empty());
    assert!(!p.has_next());
}
