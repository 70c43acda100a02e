//! Canonical next-request state.
//!
//! The hidden filter form is the only channel through which list state
//! (search text, custom filters, sort, page) reaches the server. This type
//! owns that state explicitly: every mutation fully rewrites the value for
//! its key, and the whole state is flushed into the form before any submit.
//! Last writer wins; there are no partial updates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Id of the hidden filter form.
pub const FILTER_FORM_ID: &str = "kaffy-filters-form";
/// Hidden input carrying the search text.
pub const SEARCH_INPUT_ID: &str = "kaffy-filter-search";
/// Hidden input carrying the sort field name.
pub const ORDER_FIELD_INPUT_ID: &str = "kaffy-order-field";
/// Hidden input carrying the sort direction.
pub const ORDER_WAY_INPUT_ID: &str = "kaffy-order-way";
/// Hidden input carrying the 1-based page number.
pub const PAGE_INPUT_ID: &str = "kaffy-filter-page";
/// Id prefix of the per-field custom filter inputs.
pub const CUSTOM_FILTER_PREFIX: &str = "custom-filter-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Server markup encodes the direction as `data-order="asc|desc"`;
    /// anything else falls back to ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Typed mirror of the hidden filter form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestState {
    search: String,
    order_field: String,
    order_way: Option<SortDirection>,
    page: u32,
    custom: IndexMap<String, String>,
}

impl Default for RequestState {
    fn default() -> Self {
        Self {
            search: String::new(),
            order_field: String::new(),
            order_way: None,
            page: 1,
            custom: IndexMap::new(),
        }
    }
}

impl RequestState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn order(&self) -> Option<(&str, SortDirection)> {
        self.order_way.map(|way| (self.order_field.as_str(), way))
    }

    #[must_use]
    pub fn custom_filter(&self, field: &str) -> Option<&str> {
        self.custom.get(field).map(String::as_str)
    }

    pub fn set_search(&mut self, value: &str) {
        self.search = value.to_owned();
    }

    /// Changing the ordering always returns the listing to its first page.
    pub fn set_sort(&mut self, field: &str, way: SortDirection) {
        self.order_field = field.to_owned();
        self.order_way = Some(way);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_custom_filter(&mut self, field: &str, value: &str) {
        self.custom.insert(field.to_owned(), value.to_owned());
    }

    /// One entry per canonical form input, in stable write order.
    #[must_use]
    pub fn form_fields(&self) -> IndexMap<String, String> {
        let mut fields = IndexMap::new();
        fields.insert(SEARCH_INPUT_ID.to_owned(), self.search.clone());
        fields.insert(ORDER_FIELD_INPUT_ID.to_owned(), self.order_field.clone());
        fields.insert(
            ORDER_WAY_INPUT_ID.to_owned(),
            self.order_way.map(SortDirection::as_str).unwrap_or("").to_owned(),
        );
        fields.insert(PAGE_INPUT_ID.to_owned(), self.page.to_string());
        for (field, value) in &self.custom {
            fields.insert(format!("{CUSTOM_FILTER_PREFIX}{field}"), value.clone());
        }
        fields
    }
}
