use std::fmt::{Debug, Display};
use std::sync::Arc;

use crate::common::encoding::{percent_encode, quote, EncodedValue};
use crate::Value;

/// Trait for implementing custom operators.
///
/// A custom operator replaces the built-in grammar of an expression. It
/// receives the raw value together with the output of the value encoder and
/// returns everything that follows the field name.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::{CustomOperator, Value};
///
/// #[derive(Debug)]
/// struct Regex;
///
/// impl CustomOperator for Regex {
///     fn render(&self, _value: &Value, encoded: &str, _should_quote: bool) -> String {
///         format!("=re={}", encoded)
///     }
/// }
/// ```
pub trait CustomOperator: Send + Sync + Debug {
    /// Renders the operator-and-value suffix of an expression.
    ///
    /// * `value` - the value as supplied by the caller
    /// * `encoded` - the value encoder's literal for `value`
    /// * `should_quote` - whether the encoder asks for the literal to be quoted
    fn render(&self, value: &Value, encoded: &str, should_quote: bool) -> String;
}

/// The built-in comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Equal,
    NotEqual,
    Like,
    GreaterThan,
    GreaterThanEqualTo,
    LessThan,
    LessThanEqualTo,
    StartsWith,
    EndsWith,
    Contains,
    DoesNotContain,
    In,
    NotIn,
    IsEmpty,
    IsNotEmpty,
    IsNull,
    IsNotNull,
}

impl OperatorKind {
    /// The RSQL comparison token, before any percent-encoding.
    pub fn token(&self) -> &'static str {
        match self {
            OperatorKind::Equal | OperatorKind::In => "=in=",
            OperatorKind::NotEqual
            | OperatorKind::DoesNotContain
            | OperatorKind::IsNotEmpty
            | OperatorKind::IsNotNull => "!=",
            OperatorKind::Like
            | OperatorKind::StartsWith
            | OperatorKind::EndsWith
            | OperatorKind::Contains
            | OperatorKind::IsEmpty
            | OperatorKind::IsNull => "==",
            OperatorKind::GreaterThan => ">",
            OperatorKind::GreaterThanEqualTo => ">=",
            OperatorKind::LessThan => "<",
            OperatorKind::LessThanEqualTo => "<=",
            OperatorKind::NotIn => "=out=",
        }
    }

    /// Whether the operator renders its value at all.
    pub fn takes_value(&self) -> bool {
        !matches!(
            self,
            OperatorKind::IsEmpty
                | OperatorKind::IsNotEmpty
                | OperatorKind::IsNull
                | OperatorKind::IsNotNull
        )
    }

    /// Renders the operator-and-value suffix of an expression.
    pub fn render(&self, encoded: &EncodedValue) -> String {
        let value = encoded.value.as_str();
        let quote_if = |v: &str| if encoded.should_quote { quote(v) } else { v.to_string() };

        match self {
            OperatorKind::Equal | OperatorKind::NotEqual => {
                format!("{}{}", self.token(), percent_encode(&quote_if(value)))
            }
            OperatorKind::Like => format!("{}{}", self.token(), percent_encode(&quote(value))),
            OperatorKind::GreaterThan
            | OperatorKind::GreaterThanEqualTo
            | OperatorKind::LessThan
            | OperatorKind::LessThanEqualTo => {
                format!("{}{}", percent_encode(self.token()), value)
            }
            OperatorKind::StartsWith => {
                let pattern = format!("{}*", value);
                format!("{}{}", self.token(), percent_encode(&quote(&pattern)))
            }
            OperatorKind::EndsWith => {
                let pattern = format!("*{}", value);
                format!("{}{}", self.token(), percent_encode(&quote(&pattern)))
            }
            OperatorKind::Contains | OperatorKind::DoesNotContain => {
                let pattern = format!("*{}*", value);
                format!("{}{}", self.token(), percent_encode(&quote(&pattern)))
            }
            OperatorKind::In | OperatorKind::NotIn => format!("{}({})", self.token(), value),
            OperatorKind::IsEmpty | OperatorKind::IsNotEmpty => {
                format!("{}{}", self.token(), percent_encode(&quote("")))
            }
            OperatorKind::IsNull | OperatorKind::IsNotNull => format!("{}null", self.token()),
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The operator of a filter expression: either a built-in grammar or a
/// caller-supplied [`CustomOperator`].
#[derive(Debug, Clone)]
pub enum Operator {
    BuiltIn(OperatorKind),
    Custom(Arc<dyn CustomOperator>),
}

impl Operator {
    /// Wraps a custom operator implementation.
    pub fn custom<T: CustomOperator + 'static>(operator: T) -> Self {
        Operator::Custom(Arc::new(operator))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Operator::Custom(_))
    }

    /// The built-in kind, if this is not a custom operator.
    pub fn kind(&self) -> Option<OperatorKind> {
        match self {
            Operator::BuiltIn(kind) => Some(*kind),
            Operator::Custom(_) => None,
        }
    }

    /// Renders the operator-and-value suffix of an expression for `value`.
    pub fn render(&self, value: &Value, encoded: &EncodedValue) -> String {
        match self {
            Operator::BuiltIn(kind) => {
                if kind.takes_value() && value.is_absent() {
                    log::warn!("Operator {} rendered without a value", kind);
                }
                kind.render(encoded)
            }
            Operator::Custom(custom) => custom.render(value, &encoded.value, encoded.should_quote),
        }
    }
}

impl From<OperatorKind> for Operator {
    fn from(kind: OperatorKind) -> Self {
        Operator::BuiltIn(kind)
    }
}

impl From<Arc<dyn CustomOperator>> for Operator {
    fn from(custom: Arc<dyn CustomOperator>) -> Self {
        Operator::Custom(custom)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operator::BuiltIn(a), Operator::BuiltIn(b)) => a == b,
            (Operator::Custom(a), Operator::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
