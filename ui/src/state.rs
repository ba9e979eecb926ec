//! Dashboard query/result state machine.
//!
//! All mutable dashboard state lives in one record mutated only through named
//! transitions, so the pagination and search behaviour is testable without a
//! rendering surface. Each transition that changes the derived query returns
//! `true` when a (debounced) fetch should follow.
//!
//! Responses are fenced with a monotonic sequence number: if two fetches are
//! in flight, a slower stale response that completes after a fresher one is
//! discarded instead of overwriting it.

use std::collections::HashSet;

use crate::types::{manufacturer_by_code, Record};

/// Fixed page size sent with every request.
pub const PAGE_SIZE: u64 = 20;

/// Pure request derivation: everything the remote side needs to answer one
/// page of one manufacturer's table. The table name is the only manufacturer
/// metadata sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub table: &'static str,
    pub page: u64,
    pub limit: u64,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub manufacturer: Option<char>,
    pub page: u64,
    pub search: String,
    committed_search: String,
    expanded: HashSet<usize>,
    pub rows: Vec<Record>,
    pub total_count: u64,
    pub loading: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            manufacturer: None,
            page: 1,
            search: String::new(),
            committed_search: String::new(),
            expanded: HashSet::new(),
            rows: Vec::new(),
            total_count: 0,
            loading: false,
            issued_seq: 0,
            applied_seq: 0,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to manufacturer `code` (or back to none). Resets to page 1 and
    /// clears the expansion set; row indices are positional within a page and
    /// mean nothing across sources.
    pub fn select_manufacturer(&mut self, code: Option<char>) -> bool {
        self.manufacturer = code.filter(|c| manufacturer_by_code(*c).is_some());
        self.page = 1;
        self.expanded.clear();
        if self.manufacturer.is_none() {
            self.rows.clear();
            self.total_count = 0;
        }
        self.manufacturer.is_some()
    }

    /// Update the search text. A text different from the last committed value
    /// resets to page 1 and clears the expansion set.
    pub fn edit_search(&mut self, text: &str) -> bool {
        if text != self.committed_search {
            self.page = 1;
            self.expanded.clear();
            self.committed_search = text.to_string();
        }
        self.search = text.to_string();
        self.manufacturer.is_some()
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(PAGE_SIZE)
    }

    /// Step back one page; a no-op at page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page; a no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Flip a row's membership in the expansion set. Never triggers a fetch.
    pub fn toggle_row(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Start a fetch: returns the request's sequence number for fencing.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.issued_seq
    }

    /// Apply a successful response. Returns `false` when the response is
    /// older than one already applied and was discarded. Loading clears once
    /// the most recently issued request completes, success or not.
    pub fn apply_success(&mut self, seq: u64, rows: Vec<Record>, count: u64) -> bool {
        if seq == self.issued_seq {
            self.loading = false;
        }
        if seq < self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        self.rows = rows;
        self.total_count = count;
        true
    }

    /// A failed fetch keeps the previous rows and count (stale-on-error).
    pub fn apply_failure(&mut self, seq: u64) {
        if seq == self.issued_seq {
            self.loading = false;
        }
    }

    /// Derive the remote query for the current state; `None` until a
    /// manufacturer is selected.
    pub fn query(&self) -> Option<ProductQuery> {
        let manufacturer = manufacturer_by_code(self.manufacturer?)?;
        Some(ProductQuery {
            table: manufacturer.table,
            page: self.page,
            limit: PAGE_SIZE,
            search: self.search.clone(),
        })
    }
}
