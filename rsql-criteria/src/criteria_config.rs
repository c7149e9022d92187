//! Configuration of keyword labels and filter rendering options.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::{
    INCLUDE_TOTAL_COUNT_KEYWORD, ORDER_BY_KEYWORD, PAGE_NUMBER_KEYWORD, PAGE_SIZE_KEYWORD,
    WHERE_KEYWORD,
};
use crate::errors::{ErrorKind, RsqlError, RsqlResult};

/// Labels used for each section of a rendered criteria.
///
/// Every label defaults to the conventional `$`-prefixed name. Overriding a
/// label changes only the left-hand side of its `label=value` section, never
/// the formatting of the value.
///
/// With the `serde` feature, missing fields fall back to their defaults, so a
/// partial document overrides just the labels it names:
///
/// ```rust
/// use rsql_criteria::KeywordConfig;
///
/// let keywords = KeywordConfig::default()
///     .with_where("$filter")
///     .with_page_size("$take");
/// assert_eq!(keywords.where_keyword, "$filter");
/// assert_eq!(keywords.order_by_keyword, "$orderBy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct KeywordConfig {
    pub where_keyword: String,
    pub order_by_keyword: String,
    pub page_size_keyword: String,
    pub include_total_count_keyword: String,
    pub page_number_keyword: String,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        KeywordConfig {
            where_keyword: WHERE_KEYWORD.to_string(),
            order_by_keyword: ORDER_BY_KEYWORD.to_string(),
            page_size_keyword: PAGE_SIZE_KEYWORD.to_string(),
            include_total_count_keyword: INCLUDE_TOTAL_COUNT_KEYWORD.to_string(),
            page_number_keyword: PAGE_NUMBER_KEYWORD.to_string(),
        }
    }
}

impl KeywordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_where(mut self, keyword: &str) -> Self {
        self.where_keyword = keyword.to_string();
        self
    }

    pub fn with_order_by(mut self, keyword: &str) -> Self {
        self.order_by_keyword = keyword.to_string();
        self
    }

    pub fn with_page_size(mut self, keyword: &str) -> Self {
        self.page_size_keyword = keyword.to_string();
        self
    }

    pub fn with_include_total_count(mut self, keyword: &str) -> Self {
        self.include_total_count_keyword = keyword.to_string();
        self
    }

    pub fn with_page_number(mut self, keyword: &str) -> Self {
        self.page_number_keyword = keyword.to_string();
        self
    }

    fn labels(&self) -> [(&'static str, &str); 5] {
        [
            ("where", self.where_keyword.as_str()),
            ("order by", self.order_by_keyword.as_str()),
            ("page size", self.page_size_keyword.as_str()),
            ("include total count", self.include_total_count_keyword.as_str()),
            ("page number", self.page_number_keyword.as_str()),
        ]
    }

    /// Checks that every label is non-blank and that no two sections share
    /// a label.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKeyword`] naming the first offending section.
    pub fn validate(&self) -> RsqlResult<()> {
        let mut seen = HashSet::new();
        for (section, label) in self.labels() {
            if label.trim().is_empty() {
                log::error!("Keyword for the {} section cannot be empty", section);
                return Err(RsqlError::new(
                    &format!("Keyword for the {} section cannot be empty", section),
                    ErrorKind::InvalidKeyword,
                ));
            }
            if !seen.insert(label) {
                log::error!("Keyword {} is used by more than one section", label);
                return Err(RsqlError::new(
                    &format!("Keyword {} is used by more than one section", label),
                    ErrorKind::InvalidKeyword,
                ));
            }
        }
        Ok(())
    }
}

/// Options controlling how a filter expression renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FilterOptions {
    /// Render dates as `YYYY-MM-DDTHH:mm:ss.SSSZ` in UTC instead of the
    /// local `YYYY-MM-DD`.
    pub include_timestamp: bool,
}

impl FilterOptions {
    pub fn with_timestamp() -> Self {
        FilterOptions { include_timestamp: true }
    }
}
