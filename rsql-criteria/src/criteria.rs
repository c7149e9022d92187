//! The criteria aggregator: where clause, ordering and pagination.

use std::fmt::Display;

use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::common::encoding::percent_encode;
use crate::common::{SortOrder, ORDER_BY_SEPARATOR, SECTION_SEPARATOR};
use crate::criteria_builder::CriteriaBuilder;
use crate::criteria_config::KeywordConfig;
use crate::errors::{ErrorKind, RsqlError, RsqlResult};
use crate::filter::{Connective, FilterList};

/// One `field direction` pair of an order by clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderBy {
    pub field: String,
    pub direction: SortOrder,
}

impl OrderBy {
    pub fn new(field: &str, direction: SortOrder) -> Self {
        OrderBy { field: field.to_string(), direction }
    }

    pub fn asc(field: &str) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn desc(field: &str) -> Self {
        Self::new(field, SortOrder::Descending)
    }
}

impl Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// A complete query payload: filters, ordering and pagination.
///
/// [`Criteria::build`] renders the non-empty sections, in a fixed order,
/// joined with `&`:
///
/// 1. `$where=<filters>` when the filters render anything
/// 2. `$orderBy=<field dir, ...>` when ordering is set
/// 3. `$pageSize=<n>` when a page size is set
/// 4. `$includeTotalCount=true` when a page size is set and the count is requested
/// 5. `$pageNumber=<n>` when a page number is set
///
/// The labels come from [`KeywordConfig`].
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::{field, Criteria, FilterList, SortOrder};
///
/// let mut criteria = Criteria::new();
/// criteria.filters = FilterList::from(field("code").eq("abc"));
/// criteria.add_order_by("name", SortOrder::Ascending);
/// criteria.page_size = Some(10);
///
/// assert_eq!(
///     criteria.build(),
///     "$where=code=in=%22abc%22&$orderBy=name%20asc&$pageSize=10&$includeTotalCount=true"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub filters: FilterList,
    pub order_by: Vec<OrderBy>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
    pub include_total_count: bool,
    pub keywords: KeywordConfig,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            filters: FilterList::new(),
            order_by: Vec::new(),
            page_size: None,
            page_number: None,
            include_total_count: true,
            keywords: KeywordConfig::default(),
        }
    }
}

impl Criteria {
    /// Creates an empty criteria with the default keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty criteria with the given keywords.
    pub fn with_keywords(keywords: KeywordConfig) -> Self {
        Criteria { keywords, ..Self::default() }
    }

    /// Starts a [`CriteriaBuilder`].
    pub fn builder() -> CriteriaBuilder {
        CriteriaBuilder::new()
    }

    /// Appends an order by entry.
    pub fn add_order_by(&mut self, field: &str, direction: SortOrder) {
        self.order_by.push(OrderBy::new(field, direction));
    }

    /// Checks the keywords and that any page size or page number is positive.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidKeyword`] or [`ErrorKind::InvalidPagination`].
    pub fn validate(&self) -> RsqlResult<()> {
        self.keywords.validate()?;
        if self.page_size == Some(0) {
            log::error!("Page size must be a positive number");
            return Err(RsqlError::new(
                "Page size must be a positive number",
                ErrorKind::InvalidPagination,
            ));
        }
        if self.page_number == Some(0) {
            log::error!("Page number must be a positive number");
            return Err(RsqlError::new(
                "Page number must be a positive number",
                ErrorKind::InvalidPagination,
            ));
        }
        Ok(())
    }

    /// Renders the query string.
    pub fn build(&self) -> String {
        let keywords = &self.keywords;
        let mut sections = Vec::with_capacity(5);

        let filters = self.filters.build();
        if !filters.is_empty() {
            sections.push(format!("{}={}", keywords.where_keyword, filters));
        }

        if !self.order_by.is_empty() {
            let order_by = self.order_by.iter().join(ORDER_BY_SEPARATOR);
            sections.push(format!("{}={}", keywords.order_by_keyword, percent_encode(&order_by)));
        }

        if let Some(page_size) = self.page_size {
            sections.push(format!("{}={}", keywords.page_size_keyword, page_size));
            if self.include_total_count {
                sections.push(format!("{}=true", keywords.include_total_count_keyword));
            }
        }

        if let Some(page_number) = self.page_number {
            sections.push(format!("{}={}", keywords.page_number_keyword, page_number));
        }

        let query = sections.join(SECTION_SEPARATOR);
        log::debug!("Rendered criteria query {}", query);
        query
    }

    /// Merges the filters of `other` into this criteria with logical AND.
    ///
    /// Ordering, pagination and keywords are kept from `self`; only the
    /// filters of `other` are taken.
    pub fn and(self, other: Criteria) -> Criteria {
        self.merge(other, Connective::And)
    }

    /// Merges the filters of `other` into this criteria with logical OR.
    ///
    /// Ordering, pagination and keywords are kept from `self`; only the
    /// filters of `other` are taken.
    pub fn or(self, other: Criteria) -> Criteria {
        self.merge(other, Connective::Or)
    }

    fn merge(self, other: Criteria, connective: Connective) -> Criteria {
        let filters = match (self.filters.has_content(), other.filters.has_content()) {
            (true, true) => FilterList::group(self.filters, connective, other.filters),
            (true, false) => self.filters,
            (false, true) => other.filters,
            (false, false) => FilterList::new(),
        };
        log::debug!("Merged criteria filters with {}", connective);
        Criteria { filters, ..self }
    }
}

impl Display for Criteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build())
    }
}
