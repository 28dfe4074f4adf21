//! Search Bar: holds the current free-text query and reports every change.

/// Trait defining the search bar interface.
pub trait SearchBarTrait {
    fn on_change<F: FnOnce(&str)>(&mut self, value: &str, on_search: F);
    fn query(&self) -> &str;
}

#[derive(Debug, Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchBarTrait for SearchBar {
    /// Stores `value` and invokes `on_search` with it. No debouncing.
    fn on_change<F: FnOnce(&str)>(&mut self, value: &str, on_search: F) {
        self.query = value.to_string();
        on_search(&self.query);
    }

    fn query(&self) -> &str {
        &self.query
    }
}
