//! # Derived view state of the user-management screen
//!
//! [`UserListState`] holds the full user set fetched from the backend and the
//! active search, country filter, pagination and view mode. Everything else
//! (filtered subset, visible page, page window, exports) is derived from
//! those inputs. Every mutator recomputes the derived parts before it
//! returns, so a reader never observes a filtered set that disagrees with the
//! current filter or a page that disagrees with the current pagination.
//!
//! ## Subject of pagination
//!
//! While a search term or country filter is active the pager runs over the
//! filtered subset, even when that subset is empty. With no filter active the
//! filtered subset is the full set.

use crate::export;
use crate::filter::{available_countries, UserFilter};
use crate::models::{User, ViewMode};
use crate::pagination::Pagination;

#[derive(Clone, Debug, PartialEq)]
pub struct UserListState {
    all: Vec<User>,
    filtered: Vec<User>,
    countries: Vec<String>,
    filter: UserFilter,
    pagination: Pagination,
    paginate: bool,
    view_mode: ViewMode,
    loads_in_flight: usize,
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new(10, true)
    }
}

impl UserListState {
    /// Empty state. With `paginate` false the visible page is the whole subject.
    pub fn new(page_size: usize, paginate: bool) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            countries: Vec::new(),
            filter: UserFilter::default(),
            pagination: Pagination::new(page_size),
            paginate,
            view_mode: ViewMode::default(),
            loads_in_flight: 0,
        }
    }

    /// Replace the full set after a fetch. The active filter is re-applied
    /// and the view returns to page 1.
    pub fn load(&mut self, users: Vec<User>) {
        self.countries = available_countries(&users);
        self.all = users;
        self.refilter();
    }

    /// Mark a fetch as started. Fetches may overlap; the state reports
    /// loading until every started fetch has ended.
    pub fn begin_load(&mut self) {
        self.loads_in_flight += 1;
    }

    /// Mark a fetch as ended, whether it succeeded or not.
    pub fn end_load(&mut self) {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.loads_in_flight > 0
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.refilter();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.filter.country = country.into();
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filter = UserFilter::default();
        self.refilter();
    }

    /// Returns false, leaving the page unchanged, when `page` is out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.pagination.set_page_size(size);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    fn refilter(&mut self) {
        self.filtered = if self.filter.is_active() {
            self.filter.apply(&self.all)
        } else {
            self.all.clone()
        };
        self.pagination.reset(self.filtered.len());
    }

    pub fn all(&self) -> &[User] {
        &self.all
    }

    pub fn filtered(&self) -> &[User] {
        &self.filtered
    }

    /// Users on the current page.
    pub fn visible(&self) -> &[User] {
        if self.paginate {
            self.pagination.slice(&self.filtered)
        } else {
            &self.filtered
        }
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.filter.search
    }

    pub fn country(&self) -> &str {
        &self.filter.country
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn paginates(&self) -> bool {
        self.paginate
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn total_items(&self) -> usize {
        self.pagination.total_items()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn page_window(&self) -> Vec<usize> {
        self.pagination.window()
    }

    pub fn range_label(&self) -> String {
        self.pagination.range_label()
    }

    pub fn json_view(&self) -> Result<String, serde_json::Error> {
        export::json_view(self.visible())
    }

    pub fn text_view(&self) -> String {
        export::text_view(self.visible())
    }
}
