use crate::common::SortOrder;
use crate::criteria::Criteria;
use crate::criteria_config::KeywordConfig;
use crate::errors::{ErrorKind, RsqlError, RsqlResult};
use crate::filter::FilterList;

/// Builder for a validated [`Criteria`].
///
/// `CriteriaBuilder` captures the first configuration error and reports it
/// from [`CriteriaBuilder::build`], so calls can be chained without checking
/// each step.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::{field, Criteria, SortOrder};
///
/// # fn main() -> Result<(), rsql_criteria::errors::RsqlError> {
/// let criteria = Criteria::builder()
///     .where_keyword("$filter")
///     .filters(field("code").eq("abc").into())
///     .order_by("name", SortOrder::Descending)
///     .page_size(20)
///     .build()?;
///
/// assert_eq!(
///     criteria.build(),
///     "$filter=code=in=%22abc%22&$orderBy=name%20desc&$pageSize=20&$includeTotalCount=true"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct CriteriaBuilder {
    error: Option<RsqlError>,
    criteria: Criteria,
}

impl CriteriaBuilder {
    /// Creates a builder for an empty criteria with the default keywords.
    pub fn new() -> Self {
        CriteriaBuilder {
            error: None,
            criteria: Criteria::new(),
        }
    }

    pub fn where_keyword(mut self, keyword: &str) -> Self {
        if self.check_keyword("where", keyword) {
            self.criteria.keywords.where_keyword = keyword.to_string();
        }
        self
    }

    pub fn order_by_keyword(mut self, keyword: &str) -> Self {
        if self.check_keyword("order by", keyword) {
            self.criteria.keywords.order_by_keyword = keyword.to_string();
        }
        self
    }

    pub fn page_size_keyword(mut self, keyword: &str) -> Self {
        if self.check_keyword("page size", keyword) {
            self.criteria.keywords.page_size_keyword = keyword.to_string();
        }
        self
    }

    pub fn include_total_count_keyword(mut self, keyword: &str) -> Self {
        if self.check_keyword("include total count", keyword) {
            self.criteria.keywords.include_total_count_keyword = keyword.to_string();
        }
        self
    }

    pub fn page_number_keyword(mut self, keyword: &str) -> Self {
        if self.check_keyword("page number", keyword) {
            self.criteria.keywords.page_number_keyword = keyword.to_string();
        }
        self
    }

    /// Replaces every keyword at once.
    pub fn keywords(mut self, keywords: KeywordConfig) -> Self {
        self.criteria.keywords = keywords;
        self
    }

    /// Sets the where clause.
    pub fn filters(mut self, filters: FilterList) -> Self {
        self.criteria.filters = filters;
        self
    }

    pub fn order_by(mut self, field: &str, direction: SortOrder) -> Self {
        self.criteria.add_order_by(field, direction);
        self
    }

    /// Sets the page size, which must be positive.
    pub fn page_size(mut self, page_size: u32) -> Self {
        if self.check_positive("Page size", page_size) {
            self.criteria.page_size = Some(page_size);
        }
        self
    }

    /// Sets the page number, which must be positive.
    pub fn page_number(mut self, page_number: u32) -> Self {
        if self.check_positive("Page number", page_number) {
            self.criteria.page_number = Some(page_number);
        }
        self
    }

    pub fn include_total_count(mut self, include_total_count: bool) -> Self {
        self.criteria.include_total_count = include_total_count;
        self
    }

    /// Returns the criteria, or the first error met while building it.
    ///
    /// # Errors
    ///
    /// Any error captured by a previous call. A failure of
    /// [`Criteria::validate`] is reported as an "Invalid criteria" error of
    /// the same kind, with the validation error as its cause.
    pub fn build(self) -> RsqlResult<Criteria> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if let Err(cause) = self.criteria.validate() {
            let kind = cause.kind().clone();
            return Err(RsqlError::new_with_cause("Invalid criteria", kind, cause));
        }
        Ok(self.criteria)
    }

    fn check_keyword(&mut self, section: &str, keyword: &str) -> bool {
        if self.error.is_some() {
            return false;
        }
        if keyword.trim().is_empty() {
            log::error!("Keyword for the {} section cannot be empty", section);
            self.error = Some(RsqlError::new(
                &format!("Keyword for the {} section cannot be empty", section),
                ErrorKind::InvalidKeyword,
            ));
            return false;
        }
        true
    }

    fn check_positive(&mut self, name: &str, value: u32) -> bool {
        if self.error.is_some() {
            return false;
        }
        if value == 0 {
            log::error!("{} must be a positive number", name);
            self.error = Some(RsqlError::new(
                &format!("{} must be a positive number", name),
                ErrorKind::InvalidPagination,
            ));
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::field;

    #[test]
    fn test_build_default() {
        let criteria = CriteriaBuilder::new().build().unwrap();
        assert_eq!(criteria, Criteria::new());
        assert_eq!(criteria.build(), "");
    }

    #[test]
    fn test_build_full() {
        let criteria = Criteria::builder()
            .where_keyword("$filter")
            .order_by_keyword("$sort")
            .page_size_keyword("$take")
            .include_total_count_keyword("total")
            .page_number_keyword("$skip")
            .filters(FilterList::from(field("code").contains("a")))
            .order_by("code", SortOrder::Ascending)
            .page_size(10)
            .page_number(2)
            .build()
            .unwrap();
        assert_eq!(
            criteria.build(),
            "$filter=code==%22*a*%22&$sort=code%20asc&$take=10&total=true&$skip=2"
        );
    }

    #[test]
    fn test_include_total_count_off() {
        let criteria = Criteria::builder()
            .page_size(10)
            .include_total_count(false)
            .build()
            .unwrap();
        assert_eq!(criteria.build(), "$pageSize=10");
    }

    #[test]
    fn test_first_error_is_kept() {
        let result = Criteria::builder()
            .page_size(0)
            .where_keyword("")
            .build();
        let err = result.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidPagination);
        assert_eq!(err.message(), "Page size must be a positive number");
    }

    #[test]
    fn test_empty_keyword() {
        let result = Criteria::builder().page_number_keyword(" ").build();
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::InvalidKeyword);
    }

    #[test]
    fn test_duplicate_keywords_rejected_on_build() {
        let result = Criteria::builder()
            .page_size_keyword("$skip")
            .page_number_keyword("$skip")
            .build();
        let err = result.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidKeyword);
        assert_eq!(err.message(), "Invalid criteria");

        let cause = err.cause().unwrap();
        assert_eq!(cause.kind(), &ErrorKind::InvalidKeyword);
        assert_eq!(cause.message(), "Keyword $skip is used by more than one section");
    }

    #[test]
    fn test_captured_error_has_no_wrapper() {
        let err = Criteria::builder().page_number(0).build().unwrap_err();
        assert_eq!(err.message(), "Page number must be a positive number");
        assert!(err.cause().is_none());
    }

    #[test]
    fn test_keywords_replaced_wholesale() {
        let keywords = KeywordConfig::default().with_page_number("page");
        let criteria = Criteria::builder()
            .keywords(keywords)
            .page_number(4)
            .build()
            .unwrap();
        assert_eq!(criteria.build(), "page=4");
    }
}
