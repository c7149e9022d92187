use crate::criteria_config::FilterOptions;
use crate::Value;

use super::{CustomOperator, FilterExpression, Operator, OperatorKind};

/// Creates a fluent filter builder for the specified field name.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::field;
///
/// assert_eq!(field("code").eq("abc").build(), "code=in=%22abc%22");
/// assert_eq!(field("age").gte(18).build(), "age%3E%3D18");
/// assert_eq!(field("deleted").is_null().build(), "deleted==null");
/// ```
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
        options: FilterOptions::default(),
    }
}

/// A fluent builder for constructing expressions on a specific field.
///
/// Each terminal method returns a [`FilterExpression`] that can be rendered
/// directly or combined into a [`FilterList`](super::FilterList).
pub struct FluentFilter {
    field_name: String,
    options: FilterOptions,
}

impl FluentFilter {
    /// Renders date values with their UTC timestamp.
    pub fn with_timestamp(mut self) -> Self {
        self.options.include_timestamp = true;
        self
    }

    /// Uses the given rendering options.
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    fn build<O: Into<Operator>>(self, operator: O, value: Value) -> FilterExpression {
        FilterExpression::new(&self.field_name, operator, value).with_options(self.options)
    }

    #[inline]
    pub fn eq<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::Equal, value.into())
    }

    #[inline]
    pub fn ne<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::NotEqual, value.into())
    }

    /// Exact, always-quoted match.
    #[inline]
    pub fn like<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::Like, value.into())
    }

    #[inline]
    pub fn gt<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::GreaterThan, value.into())
    }

    #[inline]
    pub fn gte<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::GreaterThanEqualTo, value.into())
    }

    #[inline]
    pub fn lt<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::LessThan, value.into())
    }

    #[inline]
    pub fn lte<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::LessThanEqualTo, value.into())
    }

    #[inline]
    pub fn starts_with<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::StartsWith, value.into())
    }

    #[inline]
    pub fn ends_with<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::EndsWith, value.into())
    }

    #[inline]
    pub fn contains<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::Contains, value.into())
    }

    #[inline]
    pub fn does_not_contain<T: Into<Value>>(self, value: T) -> FilterExpression {
        self.build(OperatorKind::DoesNotContain, value.into())
    }

    /// Membership in a list of values, e.g. `field("id").is_in(vec![1, 2])`.
    #[inline]
    pub fn is_in<T: Into<Value>>(self, values: T) -> FilterExpression {
        self.build(OperatorKind::In, values.into())
    }

    #[inline]
    pub fn not_in<T: Into<Value>>(self, values: T) -> FilterExpression {
        self.build(OperatorKind::NotIn, values.into())
    }

    #[inline]
    pub fn is_empty(self) -> FilterExpression {
        self.build(OperatorKind::IsEmpty, Value::Absent)
    }

    #[inline]
    pub fn is_not_empty(self) -> FilterExpression {
        self.build(OperatorKind::IsNotEmpty, Value::Absent)
    }

    #[inline]
    pub fn is_null(self) -> FilterExpression {
        self.build(OperatorKind::IsNull, Value::Absent)
    }

    #[inline]
    pub fn is_not_null(self) -> FilterExpression {
        self.build(OperatorKind::IsNotNull, Value::Absent)
    }

    /// Uses a caller-supplied operator in place of the built-in grammar.
    pub fn custom<C, T>(self, operator: C, value: T) -> FilterExpression
    where
        C: CustomOperator + 'static,
        T: Into<Value>,
    {
        self.build(Operator::custom(operator), value.into())
    }
}
