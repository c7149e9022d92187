use std::fmt::Display;

use crate::common::encoding::encode_value;
use crate::criteria_config::FilterOptions;
use crate::errors::{ErrorKind, RsqlError, RsqlResult};
use crate::Value;

use super::{FilterList, FilterNode, Operator};

/// A single `field operator value` predicate.
///
/// The field is written verbatim as the left-hand side; the operator decides
/// how the encoded value follows it.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::{FilterExpression, OperatorKind};
///
/// let expression = FilterExpression::new("code", OperatorKind::Contains, "a");
/// assert_eq!(expression.build(), "code==%22*a*%22");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpression {
    field: String,
    operator: Operator,
    value: Value,
    options: FilterOptions,
}

impl FilterExpression {
    /// Creates an expression with default options.
    ///
    /// The field is not checked; use [`FilterExpression::try_new`] to reject
    /// blank field names up front.
    pub fn new<O: Into<Operator>, V: Into<Value>>(field: &str, operator: O, value: V) -> Self {
        FilterExpression {
            field: field.to_string(),
            operator: operator.into(),
            value: value.into(),
            options: FilterOptions::default(),
        }
    }

    /// Creates an expression, failing if the field name is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidFieldName`] when `field` is empty or whitespace.
    pub fn try_new<O: Into<Operator>, V: Into<Value>>(
        field: &str,
        operator: O,
        value: V,
    ) -> RsqlResult<Self> {
        if field.trim().is_empty() {
            log::error!("Filter expression field name cannot be empty");
            return Err(RsqlError::new(
                "Filter expression field name cannot be empty",
                ErrorKind::InvalidFieldName,
            ));
        }
        Ok(Self::new(field, operator, value))
    }

    /// Replaces the rendering options.
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Renders the expression as an RSQL fragment.
    pub fn build(&self) -> String {
        let encoded = encode_value(&self.value, &self.options);
        let suffix = self.operator.render(&self.value, &encoded);
        log::trace!("Rendered filter on {} as {}{}", self.field, self.field, suffix);
        format!("{}{}", self.field, suffix)
    }

    /// Combines this expression with another filter using logical AND.
    pub fn and<T: Into<FilterNode>>(self, other: T) -> FilterList {
        FilterList::from(self).and(other)
    }

    /// Combines this expression with another filter using logical OR.
    pub fn or<T: Into<FilterNode>>(self, other: T) -> FilterList {
        FilterList::from(self).or(other)
    }
}

impl Display for FilterExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CustomOperator, OperatorKind};
    use chrono::{Local, TimeZone, Utc};

    #[derive(Debug)]
    struct RegexOperator;

    impl CustomOperator for RegexOperator {
        fn render(&self, _value: &Value, encoded: &str, should_quote: bool) -> String {
            if should_quote {
                format!("=re=\"{}\"", encoded)
            } else {
                format!("=re={}", encoded)
            }
        }
    }

    #[test]
    fn test_equal_on_string() {
        let expression = FilterExpression::new("code", OperatorKind::Equal, "abc");
        assert_eq!(expression.build(), "code=in=%22abc%22");
    }

    #[test]
    fn test_equal_on_number_is_not_quoted() {
        let expression = FilterExpression::new("count", OperatorKind::Equal, 5);
        assert_eq!(expression.build(), "count=in=5");
    }

    #[test]
    fn test_contains_on_string() {
        let expression = FilterExpression::new("code", OperatorKind::Contains, "a");
        assert_eq!(expression.build(), "code==%22*a*%22");
    }

    #[test]
    fn test_escaped_string_is_percent_encoded() {
        let expression = FilterExpression::new("name", OperatorKind::Like, r#"O"Brien\"#);
        assert_eq!(expression.build(), "name==%22O%5C%22Brien%5C%5C%22");
    }

    #[test]
    fn test_greater_than_on_number() {
        let expression = FilterExpression::new("age", OperatorKind::GreaterThan, 30);
        assert_eq!(expression.build(), "age%3E30");
    }

    #[test]
    fn test_in_on_array() {
        let expression = FilterExpression::new("status", OperatorKind::In, vec!["open", "in progress"]);
        assert_eq!(expression.build(), "status=in=(open,in%20progress)");

        let expression = FilterExpression::new("id", OperatorKind::NotIn, vec![1, 2, 3]);
        assert_eq!(expression.build(), "id=out=(1,2,3)");
    }

    #[test]
    fn test_null_operators_ignore_value() {
        let expression = FilterExpression::new("deleted", OperatorKind::IsNull, Value::Absent);
        assert_eq!(expression.build(), "deleted==null");
        let expression = FilterExpression::new("name", OperatorKind::IsNotEmpty, Value::Absent);
        assert_eq!(expression.build(), "name!=%22%22");
    }

    #[test]
    fn test_equal_on_null_literal() {
        let expression = FilterExpression::new("parent", OperatorKind::Equal, ());
        assert_eq!(expression.build(), "parent=in=null");
    }

    #[test]
    fn test_date_only() {
        let date = Local.with_ymd_and_hms(2021, 2, 3, 12, 0, 0).unwrap();
        let expression = FilterExpression::new("created", OperatorKind::Equal, date);
        assert_eq!(expression.build(), "created=in=%222021-02-03%22");
    }

    #[test]
    fn test_date_with_timestamp() {
        let date = Utc.with_ymd_and_hms(2021, 2, 3, 4, 5, 6).unwrap();
        let expression = FilterExpression::new("created", OperatorKind::GreaterThanEqualTo, date)
            .with_options(FilterOptions::with_timestamp());
        assert_eq!(expression.build(), "created%3E%3D2021-02-03T04:05:06.000Z");
    }

    #[test]
    fn test_custom_operator_delegation() {
        let expression = FilterExpression::new("code", Operator::custom(RegexOperator), "a.*");
        assert_eq!(expression.build(), "code=re=\"a.*\"");

        let expression = FilterExpression::new("code", Operator::custom(RegexOperator), 7);
        assert_eq!(expression.build(), "code=re=7");
    }

    #[test]
    fn test_try_new_rejects_blank_field() {
        let result = FilterExpression::try_new("  ", OperatorKind::Equal, 1);
        assert_eq!(result.unwrap_err().kind(), &ErrorKind::InvalidFieldName);
        assert!(FilterExpression::try_new("a", OperatorKind::Equal, 1).is_ok());
    }

    #[test]
    fn test_accessors_and_display() {
        let expression = FilterExpression::new("code", OperatorKind::Equal, "x");
        assert_eq!(expression.field(), "code");
        assert_eq!(expression.operator().kind(), Some(OperatorKind::Equal));
        assert_eq!(expression.value(), &Value::from("x"));
        assert!(!expression.options().include_timestamp);
        assert_eq!(expression.to_string(), expression.build());
    }

    #[test]
    fn test_combinators() {
        let a = FilterExpression::new("a", OperatorKind::Equal, 1);
        let b = FilterExpression::new("b", OperatorKind::Equal, 2);
        assert_eq!(a.clone().and(b.clone()).build(), "a=in=1%20and%20b=in=2");
        assert_eq!(a.or(b).build(), "a=in=1%20or%20b=in=2");
    }
}
