use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// A typed value on the right-hand side of a filter expression.
///
/// `Value` covers every value shape a criteria can carry: strings, numbers,
/// booleans, dates, flat sequences, the explicit `null` literal and the
/// absence of any value. Conversions exist for the Rust primitives, string
/// types, chrono dates, `Option<T>` and vectors/arrays, so most call sites
/// simply pass a literal:
///
/// ```rust
/// use rsql_criteria::Value;
///
/// assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
/// assert_eq!(Value::from(42), Value::Int(42));
/// assert_eq!(Value::from(None::<i32>), Value::Absent);
/// assert_eq!(Value::from(vec![1, 2]), Value::Array(vec![Value::Int(1), Value::Int(2)]));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all. Used by operators that ignore their value
    /// (`IsEmpty`, `IsNull`, ...) and dropped when it appears inside an array.
    #[default]
    Absent,
    /// The explicit `null` literal.
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integral number.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string value.
    String(String),
    /// A point in time.
    Date(DateTime<Utc>),
    /// An ordered sequence of values.
    Array(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64, isize);

// integers beyond the i64 range keep their magnitude as a float
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(v) => Value::Int(v),
                        Err(_) => Value::Float(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, i128, u128);

impl From<f32> for Value {
    /// Widens through the shortest decimal form of the `f32`, so `0.1f32`
    /// stays `0.1` instead of `0.10000000149011612`.
    fn from(value: f32) -> Self {
        Value::Float(value.to_string().parse().unwrap_or(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<Local>> for Value {
    fn from(value: DateTime<Local>) -> Self {
        Value::Date(value.with_timezone(&Utc))
    }
}

impl From<NaiveDate> for Value {
    /// Interprets the date as local midnight, so that a date-only rendering
    /// gives back the same calendar date.
    fn from(value: NaiveDate) -> Self {
        let midnight = value.and_time(chrono::NaiveTime::MIN);
        match Local.from_local_datetime(&midnight).earliest() {
            Some(local) => Value::Date(local.with_timezone(&Utc)),
            // local midnight skipped by a DST transition
            None => Value::Date(Utc.from_utc_datetime(&midnight)),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}
