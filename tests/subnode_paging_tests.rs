use lifemap::domain::app_state::AppState;
use lifemap::domain::child_item::ChildItem;
use lifemap::ui::views::radial_view::RadialView;
use lifemap::ui::views::subnode_paging::{
    page_view, OverflowControl, PEOPLE_PAGE_SIZE, SUBNODE_PAGE_SIZE,
};

#[test]
fn test_six_items_toggle_round_trip() {
    let items: Vec<String> = (1..=6).map(|i| format!("item {i}")).collect();

    let initial = page_view(&items, SUBNODE_PAGE_SIZE, false);
    assert_eq!(initial.visible, items[..3].to_vec());
    assert_eq!(initial.control, Some(OverflowControl::More(3)));

    let expanded = page_view(&items, SUBNODE_PAGE_SIZE, true);
    assert_eq!(expanded.visible, items[3..].to_vec());
    assert_eq!(expanded.control, Some(OverflowControl::Collapse));

    // Second toggle lands exactly back on the initial page
    let back = page_view(&items, SUBNODE_PAGE_SIZE, false);
    assert_eq!(back, initial);
}

#[test]
fn test_remainder_is_never_subdivided() {
    // 8 items with K=3: the expanded page is all five remaining items
    let items: Vec<i32> = (0..8).collect();
    let expanded = page_view(&items, SUBNODE_PAGE_SIZE, true);
    assert_eq!(expanded.visible, (3..8).collect::<Vec<_>>());
    assert_eq!(expanded.control, Some(OverflowControl::Collapse));
}

#[test]
fn test_exact_fit_shows_no_control() {
    let items = vec!["Budget", "Investments", "Savings"];
    let page = page_view(&items, SUBNODE_PAGE_SIZE, false);
    assert_eq!(page.visible.len(), 3);
    assert!(page.control.is_none());
}

#[test]
fn test_empty_area_renders_no_children_and_no_control() {
    let state = AppState::new();
    let items = state.child_items("Growth");
    assert!(items.is_empty());

    let page = page_view(&items, SUBNODE_PAGE_SIZE, false);
    assert!(page.visible.is_empty());
    assert!(page.control.is_none());
}

#[test]
fn test_people_overflow_uses_the_smaller_page() {
    let mut state = AppState::new();
    state.set_people(vec!["Mom".into(), "Dad".into(), "Partner".into()]);
    let items = state.child_items("Relationships");
    assert!(items.iter().all(ChildItem::is_person));

    let page = page_view(&items, PEOPLE_PAGE_SIZE, false);
    assert_eq!(page.visible.len(), 2);
    assert_eq!(page.control, Some(OverflowControl::More(1)));

    let expanded = page_view(&items, PEOPLE_PAGE_SIZE, true);
    assert_eq!(expanded.visible.len(), 1);
    assert_eq!(expanded.control, Some(OverflowControl::Collapse));
}

#[test]
fn test_expanded_flag_resets_when_list_shrinks_to_fit() {
    let mut view = RadialView::new();
    view.toggle_expanded("Work");
    assert!(view.is_expanded("Work"));

    // Still overflowing: the flag stays
    view.sync_expanded("Work", 6, SUBNODE_PAGE_SIZE);
    assert!(view.is_expanded("Work"));

    // Deletions brought the list down to a single page
    view.sync_expanded("Work", 2, SUBNODE_PAGE_SIZE);
    assert!(!view.is_expanded("Work"));

    // A later overflow starts collapsed again
    view.sync_expanded("Work", 5, SUBNODE_PAGE_SIZE);
    assert!(!view.is_expanded("Work"));
}
