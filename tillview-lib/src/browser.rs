//! The list browser engine

use std::collections::HashSet;
use std::fmt;

use crate::error::BrowseError;
use crate::filter::FilterSet;
use crate::filter::Predicate;
use crate::filter::SearchFields;
use crate::page::PageState;
use crate::record::ListRecord;
use crate::selection::SelectionSet;

/// Criterion name reserved for the text-search box.
pub const TEXT_SEARCH_CRITERION: &str = "text-search";

/// A user intent forwarded by the presentation layer.
///
/// Intents map one-to-one onto engine operations; [`ListBrowser::handle`]
/// dispatches them. Installing an option-style criterion carries a closure
/// and therefore goes through [`ListBrowser::set_criterion`] directly rather
/// than this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseIntent<K> {
    /// The search box content changed.
    SearchTextChanged(String),
    /// A named option filter was switched off.
    CriterionCleared(String),
    /// The rows-per-page selector changed.
    PageSizeChanged(usize),
    /// A page number control was clicked.
    PageRequested(usize),
    /// The next-page control was clicked.
    NextPage,
    /// The previous-page control was clicked.
    PreviousPage,
    /// The first-page control was clicked.
    FirstPage,
    /// The last-page control was clicked.
    LastPage,
    /// A row's selection checkbox was toggled.
    RowToggled(K),
}

/// The list browsing engine behind every listing screen.
///
/// `ListBrowser<R>` owns the full record set, the active filter criteria,
/// the pagination state and the selection set, and derives the visible view
/// from them deterministically. Every operation is a synchronous, total
/// recompute; there is no loading state in here. Fetching is the data
/// source's concern, and [`replace_records`](Self::replace_records) is the
/// single re-entry point after a fetch completes.
///
/// # Example
///
/// ```
/// use tillview_lib::{ListBrowser, ListRecord};
///
/// #[derive(Clone)]
/// struct Terminal { id: u32, name: String }
///
/// impl ListRecord for Terminal {
///     type Key = u32;
///     fn key(&self) -> u32 { self.id }
/// }
///
/// let mut browser = ListBrowser::new()
///     .with_search_field(|t: &Terminal| t.name.clone());
///
/// browser.replace_records(vec![
///     Terminal { id: 1, name: "Caja 1".into() },
///     Terminal { id: 2, name: "Caja 2".into() },
/// ]);
/// browser.set_search_text("caja 2");
///
/// assert_eq!(browser.page_records().len(), 1);
/// assert_eq!(browser.current_page(), 1);
/// ```
pub struct ListBrowser<R: ListRecord> {
    /// The full record set, as last supplied by the data source.
    records: Vec<R>,
    /// Active filter criteria, ANDed together.
    filter: FilterSet<R>,
    /// The screen's designated searchable fields.
    search: SearchFields<R>,
    /// Page size and current page.
    page: PageState,
    /// User-selected record keys.
    selection: SelectionSet<R::Key>,
    /// Indices into `records` that pass the filter, in original order.
    filtered: Vec<usize>,
}

impl<R: ListRecord> ListBrowser<R> {
    /// Creates an empty browser with the default page size, no criteria and
    /// no searchable fields.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            filter: FilterSet::new(),
            search: SearchFields::new(),
            page: PageState::new(),
            selection: SelectionSet::new(),
            filtered: Vec::new(),
        }
    }

    /// Adds a searchable field for the text-search criterion.
    pub fn with_search_field(
        mut self,
        field: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        self.search.push(field);
        self
    }

    // -------------------------------------------------------------------------
    // Record set
    // -------------------------------------------------------------------------

    /// Replaces the full record set.
    ///
    /// A fresh data load invalidates any page context, so the current page
    /// resets to 1. The selection is pruned to keys still present; criteria
    /// stay active. An empty set is valid and yields an empty view.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.page.reset();
        self.recompute();

        let live_keys: HashSet<R::Key> = self.records.iter().map(ListRecord::key).collect();
        self.selection.prune(&live_keys);
    }

    /// The full record set, unfiltered.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records in the full set.
    pub fn total_len(&self) -> usize {
        self.records.len()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Adds or replaces a named criterion.
    ///
    /// A changed filter invalidates the page position, so the current page
    /// resets to 1. Selection is untouched: it persists across filter
    /// changes by key, not by position.
    pub fn set_criterion(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) {
        self.filter.set(name, Box::new(predicate) as Predicate<R>);
        self.page.reset();
        self.recompute();
    }

    /// Removes a named criterion. Returns `true` if one was removed.
    pub fn clear_criterion(&mut self, name: &str) -> bool {
        if self.filter.clear(name) {
            self.page.reset();
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Sets the text-search query.
    ///
    /// An empty or whitespace-only query removes the search criterion;
    /// anything else installs a case-insensitive substring match over the
    /// fields configured with [`with_search_field`](Self::with_search_field).
    pub fn set_search_text(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.clear_criterion(TEXT_SEARCH_CRITERION);
        } else {
            let predicate = self.search.matcher(query);
            self.filter.set(TEXT_SEARCH_CRITERION, predicate);
            self.page.reset();
            self.recompute();
        }
    }

    /// Names of the active criteria, in order.
    pub fn criterion_names(&self) -> impl Iterator<Item = &str> {
        self.filter.names()
    }

    /// Records passing the active criteria, in original order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &R> {
        self.filtered.iter().map(|&index| &self.records[index])
    }

    /// Number of records passing the active criteria.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// `true` when no record passes the active criteria.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Sets the page size.
    ///
    /// A page size of zero is a programmer error and is rejected with
    /// [`BrowseError::InvalidArgument`], leaving state unchanged. On
    /// success the current page is re-clamped against the new page count.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), BrowseError> {
        if size == 0 {
            return Err(BrowseError::invalid_argument(
                "page size must be at least 1",
            ));
        }
        self.page.set_page_size(size);
        self.page.clamp(self.total_pages());
        Ok(())
    }

    /// Moves to the requested page, silently clamping out-of-range numbers.
    ///
    /// Stale requests (a page button rendered before a refetch shrank the
    /// set) are tolerated and corrected, never surfaced as errors.
    pub fn set_current_page(&mut self, page: usize) {
        self.page.set_current_page(page, self.total_pages());
    }

    /// Moves one page forward; no-op on the last page.
    pub fn next_page(&mut self) {
        self.set_current_page(self.page.current_page().saturating_add(1));
    }

    /// Moves one page back; no-op on the first page.
    pub fn previous_page(&mut self) {
        self.set_current_page(self.page.current_page().saturating_sub(1));
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) {
        self.set_current_page(1);
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        self.set_current_page(self.total_pages());
    }

    /// The current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// The page size.
    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    /// Number of pages in the filtered set; 0 when it is empty.
    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered.len())
    }

    /// The records on the current page, a contiguous slice of the filtered
    /// set in original order.
    pub fn page_records(&self) -> Vec<&R> {
        self.filtered[self.page.bounds(self.filtered.len())]
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// The page numbers to render as navigation controls.
    ///
    /// See [`PageState::window`] for the exact windowing algorithm.
    pub fn page_window(&self, max_visible: usize) -> Vec<usize> {
        self.page.window(self.total_pages(), max_visible)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggles a record's selection by key.
    ///
    /// No-op when the key is not in the full record set; a toggle racing a
    /// refetch must be tolerated, not rejected.
    pub fn toggle_selection(&mut self, key: R::Key) {
        if self.records.iter().any(|record| record.key() == key) {
            self.selection.toggle(key);
        }
    }

    /// Checks if a record is selected.
    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Read-only view of the selection.
    pub fn selection(&self) -> &SelectionSet<R::Key> {
        &self.selection
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -------------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------------

    /// Dispatches a presentation intent to the matching operation.
    pub fn handle(&mut self, intent: BrowseIntent<R::Key>) -> Result<(), BrowseError> {
        match intent {
            BrowseIntent::SearchTextChanged(query) => self.set_search_text(&query),
            BrowseIntent::CriterionCleared(name) => {
                self.clear_criterion(&name);
            }
            BrowseIntent::PageSizeChanged(size) => self.set_page_size(size)?,
            BrowseIntent::PageRequested(page) => self.set_current_page(page),
            BrowseIntent::NextPage => self.next_page(),
            BrowseIntent::PreviousPage => self.previous_page(),
            BrowseIntent::FirstPage => self.first_page(),
            BrowseIntent::LastPage => self.last_page(),
            BrowseIntent::RowToggled(key) => self.toggle_selection(key),
        }
        Ok(())
    }

    /// Rebuilds the filtered index list and re-clamps the current page.
    fn recompute(&mut self) {
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.matches(record))
            .map(|(index, _)| index)
            .collect();
        self.page.clamp(self.total_pages());
    }
}

impl<R: ListRecord> Default for ListBrowser<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ListRecord> fmt::Debug for ListBrowser<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBrowser")
            .field("records", &self.records.len())
            .field("filtered", &self.filtered.len())
            .field("criteria", &self.filter.names().collect::<Vec<_>>())
            .field("page", &self.page)
            .field("selected", &self.selection.len())
            .finish()
    }
}
