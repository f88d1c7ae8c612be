//! # Client-side pagination
//!
//! [`Pagination`] tracks the current page, the page size, and the number of
//! items in the paginated subject. Pages are 1-based. Out-of-range page
//! requests are ignored rather than clamped, so a stale "next" click can never
//! move the view past the last page.
//!
//! [`Pagination::window`] yields the page numbers shown in the pager: at most
//! [`MAX_VISIBLE_PAGES`], centred on the current page where the range allows.

use std::ops::Range;

/// Maximum number of page buttons rendered by the pager.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Pagination {
    /// Empty pagination on page 1. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, 0 for an empty subject.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Replace the subject length and go back to page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Move to `page` if `1 <= page <= total_pages`. Returns whether the page
    /// changed hands; out-of-range requests leave the state untouched.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Change the page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Index range of the current page within a subject of `len` items.
    pub fn range_in(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range_in(items.len())]
    }

    /// Page numbers for the pager controls.
    pub fn window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages())
    }

    /// "Showing X to Y of Z" label for the current page.
    pub fn range_label(&self) -> String {
        let range = self.range_in(self.total_items);
        if range.is_empty() {
            return format!("Showing 0 of {}", self.total_items);
        }
        format!(
            "Showing {} to {} of {}",
            range.start + 1,
            range.end,
            self.total_items
        )
    }
}

/// At most [`MAX_VISIBLE_PAGES`] page numbers around `current` within `1..=total`.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).collect();
    }

    let half = MAX_VISIBLE_PAGES / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = (current + half).min(total);

    if end - start < MAX_VISIBLE_PAGES - 1 {
        if start == 1 {
            end = (start + MAX_VISIBLE_PAGES - 1).min(total);
        } else {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(total_items: usize, page_size: usize) -> Pagination {
        let mut p = Pagination::new(page_size);
        p.reset(total_items);
        p
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(paged(0, 10).total_pages(), 0);
        assert_eq!(paged(1, 10).total_pages(), 1);
        assert_eq!(paged(10, 10).total_pages(), 1);
        assert_eq!(paged(11, 10).total_pages(), 2);
        assert_eq!(paged(95, 20).total_pages(), 5);
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut p = paged(25, 10);
        assert!(p.go_to(3));
        assert_eq!(p.current_page(), 3);

        assert!(!p.go_to(0));
        assert_eq!(p.current_page(), 3);
        assert!(!p.go_to(4));
        assert_eq!(p.current_page(), 3);

        let mut empty = paged(0, 10);
        assert!(!empty.go_to(1));
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let mut p = paged(40, 10);
        p.go_to(4);
        p.set_page_size(20);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 2);

        p.set_page_size(0);
        assert_eq!(p.page_size(), 1);
        assert_eq!(p.total_pages(), 40);
    }

    #[test]
    fn test_slices_cover_subject_exactly() {
        for len in [0usize, 1, 7, 10, 23, 40] {
            let items: Vec<usize> = (0..len).collect();
            for size in [1usize, 3, 5, 10, 50] {
                let mut p = paged(len, size);
                let mut seen = Vec::new();
                for page in 1..=p.total_pages() {
                    assert!(p.go_to(page));
                    seen.extend_from_slice(p.slice(&items));
                }
                assert_eq!(seen, items, "len={len} size={size}");

                if len > 0 {
                    p.go_to(p.total_pages());
                    let expected_last = if len % size == 0 { size } else { len % size };
                    assert_eq!(p.slice(&items).len(), expected_last);
                }
            }
        }
    }

    #[test]
    fn test_window_small_totals() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);

        assert_eq!(page_window(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 20), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(20, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_range_label() {
        let mut p = paged(23, 10);
        assert_eq!(p.range_label(), "Showing 1 to 10 of 23");
        p.go_to(3);
        assert_eq!(p.range_label(), "Showing 21 to 23 of 23");
        assert_eq!(paged(0, 10).range_label(), "Showing 0 of 0");
    }
}
