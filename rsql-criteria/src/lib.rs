//! # rsql_criteria - RSQL query strings for REST clients
//!
//! Serializes a structured filter, ordering and pagination description into
//! an RSQL-encoded, URL-safe query string that can be appended after the `?`
//! of a request URL.
//!
//! ## Pipeline
//!
//! - **Value encoding** ([`common::encoding`]): typed [`Value`]s become RSQL
//!   literals with a quoting flag.
//! - **Filter expressions** ([`FilterExpression`]): one field, one
//!   [`Operator`], one value.
//! - **Filter lists** ([`FilterList`]): AND/OR compositions of expressions
//!   and nested lists.
//! - **Criteria** ([`Criteria`]): the where clause, ordering and pagination
//!   joined into the final query string.
//!
//! ## Quick Start
//!
//! ```rust
//! use rsql_criteria::{field, Criteria, FilterList, SortOrder};
//!
//! let mut criteria = Criteria::new();
//! criteria.filters = FilterList::new()
//!     .and(field("status").is_in(vec!["open", "closed"]))
//!     .and(field("title").contains("rust"));
//! criteria.add_order_by("created", SortOrder::Descending);
//! criteria.page_size = Some(20);
//! criteria.page_number = Some(1);
//!
//! assert_eq!(
//!     criteria.build(),
//!     "$where=status=in=(open,closed)%20and%20title==%22*rust*%22\
//!      &$orderBy=created%20desc&$pageSize=20&$includeTotalCount=true&$pageNumber=1"
//! );
//! ```
//!
//! ## Module Organization
//!
//! - [`common`] - value model, sort order and the value encoder
//! - [`criteria`] - the criteria aggregator
//! - [`criteria_builder`] - validating builder for criteria
//! - [`criteria_config`] - keyword labels and filter options
//! - [`errors`] - error types and result definitions
//! - [`filter`] - filter expressions, operators and filter lists

pub mod common;
pub mod criteria;
pub mod criteria_builder;
pub mod criteria_config;
pub mod errors;
pub mod filter;

pub use common::{SortOrder, Value};
pub use criteria::{Criteria, OrderBy};
pub use criteria_builder::CriteriaBuilder;
pub use criteria_config::{FilterOptions, KeywordConfig};
pub use filter::{
    field, Connective, CustomOperator, FilterEntry, FilterExpression, FilterList, FilterNode,
    FluentFilter, Operator, OperatorKind,
};

#[cfg(test)]
mod tests {
    // Setup only one time throughout the crate.
    // It will take effect during test, crate wide
    #[ctor::ctor]
    fn init() {
        colog::init();
    }
}
