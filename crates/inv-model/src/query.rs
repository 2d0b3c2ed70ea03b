//! Filter and sort state driving the filtered view.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Field the filtered view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Nsn,
    Description,
    /// Numeric comparison on the parsed quantity.
    Quantity,
}

impl SortKey {
    /// Token used in sort selectors (`nsn`, `description`, `qty`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Nsn => "nsn",
            Self::Description => "description",
            Self::Quantity => "qty",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nsn => "NSN",
            Self::Description => "Description",
            Self::Quantity => "Quantity",
        }
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nsn" => Ok(Self::Nsn),
            "description" | "desc" => Ok(Self::Description),
            "qty" | "quantity" => Ok(Self::Quantity),
            other => Err(ModelError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Sort key plus direction, written as `<key>-asc` / `<key>-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortOrder {
    #[must_use]
    pub const fn new(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, true)
    }

    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, false)
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::ascending(SortKey::Nsn)
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let Some((key, direction)) = trimmed.rsplit_once('-') else {
            return Err(ModelError::UnknownSortOrder(trimmed.to_string()));
        };
        let ascending = match direction.to_ascii_lowercase().as_str() {
            "asc" => true,
            "desc" => false,
            _ => return Err(ModelError::UnknownSortOrder(trimmed.to_string())),
        };
        let key = key
            .parse::<SortKey>()
            .map_err(|_| ModelError::UnknownSortOrder(trimmed.to_string()))?;
        Ok(Self { key, ascending })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.ascending { "asc" } else { "desc" };
        write!(f, "{}-{direction}", self.key)
    }
}

/// Current filter and sort settings.
///
/// An empty `search_term` or `kit_filter` disables that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub search_term: String,
    pub kit_filter: String,
    pub sort: SortOrder,
}

impl QueryState {
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn with_kit_filter(mut self, kit: impl Into<String>) -> Self {
        self.kit_filter = kit.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort.key
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort.ascending
    }

    /// True when neither the text nor the kit filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.kit_filter.is_empty()
    }
}

/// Partial update applied to a [`QueryState`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryUpdate {
    pub search_term: Option<String>,
    pub kit_filter: Option<String>,
    pub sort: Option<SortOrder>,
}

impl QueryUpdate {
    pub fn apply_to(self, state: &mut QueryState) {
        if let Some(term) = self.search_term {
            state.search_term = term;
        }
        if let Some(kit) = self.kit_filter {
            state.kit_filter = kit;
        }
        if let Some(sort) = self.sort {
            state.sort = sort;
        }
    }
}
