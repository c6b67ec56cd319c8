//! Pagination state and the page-window algorithm

use std::ops::Range;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state: page size and the current 1-based page number.
///
/// `PageState` never fails on navigation input; out-of-range page numbers
/// clamp to `[1, max(total_pages, 1)]`. Stale clicks from the presentation
/// layer (e.g. a page button rendered before a refetch shrank the set) are
/// expected input, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl PageState {
    /// Creates pagination state on page 1 with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Sets the page size. Callers validate `size >= 1` first.
    pub(crate) fn set_page_size(&mut self, size: usize) {
        debug_assert!(size >= 1);
        self.page_size = size;
    }

    /// Moves to the requested page, clamped against the page count.
    pub fn set_current_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Re-clamps the current page after the filtered set or page size changed.
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Resets to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Number of pages needed for `filtered_len` records; 0 when empty.
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size)
    }

    /// Index range of the current page within the filtered set.
    pub fn bounds(&self, filtered_len: usize) -> Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        let start = start.min(filtered_len);
        let end = (start + self.page_size).min(filtered_len);
        start..end
    }

    /// The contiguous page numbers to render as navigation controls.
    ///
    /// The window is centered on the current page, then clamped to the page
    /// count, then shifted back left if the clamp shortened it:
    ///
    /// 1. `start = max(1, current - max_visible / 2)`
    /// 2. `end = min(total_pages, start + max_visible - 1)`
    /// 3. if the window holds fewer than `max_visible` pages,
    ///    `start = max(1, end - max_visible + 1)`
    ///
    /// Step 3 is what keeps the window full near the last page: with 10
    /// pages, current page 9 and 4 visible, the result is `[7, 8, 9, 10]`
    /// rather than a 3-page window. Empty when there are no pages or
    /// `max_visible` is 0.
    pub fn window(&self, total_pages: usize, max_visible: usize) -> Vec<usize> {
        if total_pages == 0 || max_visible == 0 {
            return Vec::new();
        }
        // A current page clamped against an older, larger total may exceed
        // the total given here; it clamps for windowing like any other
        // out-of-range input.
        let current = self.current_page.min(total_pages);
        let start = current.saturating_sub(max_visible / 2).max(1);
        let end = total_pages.min(start + max_visible - 1);
        let start = if end - start + 1 < max_visible {
            end.saturating_sub(max_visible - 1).max(1)
        } else {
            start
        };
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page: usize) -> PageState {
        let mut state = PageState::new();
        state.set_current_page(page, usize::MAX / 2);
        state
    }

    #[test]
    fn test_window_centers_on_current_page() {
        assert_eq!(at(5).window(10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_reshifts_near_last_page() {
        assert_eq!(at(9).window(10, 4), vec![7, 8, 9, 10]);
        assert_eq!(at(10).window(10, 4), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_window_clamps_near_first_page() {
        assert_eq!(at(1).window(10, 4), vec![1, 2, 3, 4]);
        assert_eq!(at(2).window(10, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_shorter_than_max_when_few_pages() {
        assert_eq!(at(1).window(2, 5), vec![1, 2]);
        assert_eq!(at(1).window(1, 7), vec![1]);
    }

    #[test]
    fn test_window_with_stale_current_page() {
        // Clamped against 10 pages, then windowed against a set that
        // shrank to 3: the window clamps instead of failing.
        let mut state = PageState::new();
        state.set_current_page(9, 10);

        assert_eq!(state.window(3, 2), vec![2, 3]);
        assert_eq!(state.window(3, 5), vec![1, 2, 3]);
        assert_eq!(state.window(1, 4), vec![1]);
    }

    #[test]
    fn test_window_empty_cases() {
        assert_eq!(at(1).window(0, 5), Vec::<usize>::new());
        assert_eq!(at(1).window(10, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let mut state = PageState::new();
        state.set_page_size(5);
        assert_eq!(state.total_pages(0), 0);
        assert_eq!(state.total_pages(5), 1);
        assert_eq!(state.total_pages(6), 2);
        assert_eq!(state.total_pages(12), 3);
    }

    #[test]
    fn test_bounds_last_page_is_partial() {
        let mut state = PageState::new();
        state.set_page_size(5);
        state.set_current_page(3, state.total_pages(12));
        assert_eq!(state.bounds(12), 10..12);
    }

    #[test]
    fn test_current_page_clamps() {
        let mut state = PageState::new();
        state.set_current_page(99, 4);
        assert_eq!(state.current_page(), 4);
        state.set_current_page(0, 4);
        assert_eq!(state.current_page(), 1);
        state.set_current_page(7, 0);
        assert_eq!(state.current_page(), 1);
    }
}
