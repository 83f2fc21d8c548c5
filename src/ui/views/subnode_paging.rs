/// People fan out two at a time, generic subnodes three at a time.
pub const PEOPLE_PAGE_SIZE: usize = 2;
pub const SUBNODE_PAGE_SIZE: usize = 3;

/// Affordance shown at the trailing edge of the arc when the child list
/// overflows the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowControl {
    /// Collapsed: show "+count" for the hidden remainder.
    More(usize),
    /// Expanded: show a back glyph, no count.
    Collapse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<T> {
    pub visible: Vec<T>,
    pub control: Option<OverflowControl>,
}

/// The visible slice of a child list plus its overflow control.
///
/// This is deliberately a two-state toggle, not real pagination: expanding
/// always shows the whole remainder `items[K..]` in one batch, however large.
pub fn page_view<T: Clone>(items: &[T], page_size: usize, expanded: bool) -> PageView<T> {
    let page_size = page_size.max(1);
    if items.len() <= page_size {
        return PageView {
            visible: items.to_vec(),
            control: None,
        };
    }
    if expanded {
        PageView {
            visible: items[page_size..].to_vec(),
            control: Some(OverflowControl::Collapse),
        }
    } else {
        PageView {
            visible: items[..page_size].to_vec(),
            control: Some(OverflowControl::More(items.len() - page_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_list_has_no_control() {
        let items = vec!["Exercise", "Diet", "Sleep"];
        let page = page_view(&items, SUBNODE_PAGE_SIZE, false);
        assert_eq!(page.visible, items);
        assert_eq!(page.control, None);
    }

    #[test]
    fn test_collapsed_shows_first_page_and_count() {
        let items: Vec<i32> = (0..6).collect();
        let page = page_view(&items, 3, false);
        assert_eq!(page.visible, vec![0, 1, 2]);
        assert_eq!(page.control, Some(OverflowControl::More(3)));
    }

    #[test]
    fn test_expanded_shows_whole_remainder() {
        // More than 2K items: the second page is still everything past K.
        let items: Vec<i32> = (0..10).collect();
        let page = page_view(&items, 3, true);
        assert_eq!(page.visible, (3..10).collect::<Vec<_>>());
        assert_eq!(page.control, Some(OverflowControl::Collapse));
    }

    #[test]
    fn test_toggle_round_trip() {
        let items: Vec<i32> = (0..6).collect();
        let initial = page_view(&items, 3, false);
        let expanded = page_view(&items, 3, true);
        assert_eq!(expanded.visible, vec![3, 4, 5]);
        assert_eq!(page_view(&items, 3, false), initial);
    }

    #[test]
    fn test_people_page_size() {
        let people = vec!["Mom", "Dad", "Partner"];
        let page = page_view(&people, PEOPLE_PAGE_SIZE, false);
        assert_eq!(page.visible, vec!["Mom", "Dad"]);
        assert_eq!(page.control, Some(OverflowControl::More(1)));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let page = page_view::<&str>(&[], SUBNODE_PAGE_SIZE, false);
        assert!(page.visible.is_empty());
        assert_eq!(page.control, None);
    }

    #[test]
    fn test_zero_page_size_is_guarded() {
        let items = vec![1, 2];
        let page = page_view(&items, 0, false);
        assert_eq!(page.visible, vec![1]);
        assert_eq!(page.control, Some(OverflowControl::More(1)));
    }
}
