use chrono::{DateTime, Local, Utc};
use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::common::{ARRAY_SEPARATOR, NULL_LITERAL};
use crate::criteria_config::FilterOptions;
use crate::Value;

/// Characters left untouched when percent-encoding a query string component:
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const EXPONENT_UPPER_BOUND: f64 = 1e21;
const EXPONENT_LOWER_BOUND: f64 = 1e-6;

/// The RSQL literal of a value together with whether it must be wrapped in
/// double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedValue {
    pub value: String,
    pub should_quote: bool,
}

impl EncodedValue {
    fn quoted(value: String) -> Self {
        EncodedValue { value, should_quote: true }
    }

    fn bare(value: String) -> Self {
        EncodedValue { value, should_quote: false }
    }
}

/// Percent-encodes a query string component.
#[inline]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_ENCODE_SET).to_string()
}

/// Escapes backslashes, then double quotes, with a leading backslash.
#[inline]
pub fn escape(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Wraps the input in literal double quotes.
#[inline]
pub fn quote(input: &str) -> String {
    format!("\"{}\"", input)
}

/// Renders a value as its RSQL literal.
///
/// | value    | literal                                      | quoted |
/// |----------|----------------------------------------------|--------|
/// | string   | escaped                                      | yes    |
/// | number   | decimal form                                 | no     |
/// | boolean  | `true` / `false`                             | no     |
/// | date     | `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm:ss.SSSZ`   | yes    |
/// | array    | element-wise encoded, joined with `,`        | no     |
/// | null     | `null`                                       | no     |
/// | absent   | empty                                        | no     |
pub fn encode_value(value: &Value, options: &FilterOptions) -> EncodedValue {
    match value {
        Value::String(s) => EncodedValue::quoted(escape(s)),
        Value::Int(i) => EncodedValue::bare(i.to_string()),
        Value::Float(f) => EncodedValue::bare(format_float(*f)),
        Value::Bool(b) => EncodedValue::bare(b.to_string()),
        Value::Date(dt) => EncodedValue::quoted(format_date(dt, options.include_timestamp)),
        Value::Array(values) => EncodedValue::bare(encode_array(values, options)),
        Value::Null => EncodedValue::bare(NULL_LITERAL.to_string()),
        Value::Absent => EncodedValue::default(),
    }
}

/// Formats a date either as the local calendar date, or as the UTC date
/// followed by the UTC time of day with millisecond precision.
pub fn format_date(date: &DateTime<Utc>, include_timestamp: bool) -> String {
    if include_timestamp {
        date.format(TIMESTAMP_FORMAT).to_string()
    } else {
        date.with_timezone(&Local).format(DATE_FORMAT).to_string()
    }
}

/// Formats a float the way it reads in a query: integral values carry no
/// fractional part and non-finite values use their symbolic names.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// with an explicit exponent sign (`1e+21`, `1.5e-7`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        log::warn!("Encoding NaN into a filter value");
        "NaN".to_string()
    } else if value.is_infinite() {
        log::warn!("Encoding an infinite number into a filter value");
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if value == 0.0 {
        // also covers negative zero
        "0".to_string()
    } else if value.abs() >= EXPONENT_UPPER_BOUND || value.abs() < EXPONENT_LOWER_BOUND {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => scientific,
        }
    } else {
        value.to_string()
    }
}

fn encode_array(values: &[Value], options: &FilterOptions) -> String {
    values
        .iter()
        .filter(|v| !v.is_absent())
        .map(|v| match v {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::String(s) => percent_encode(&escape(s)),
            other => percent_encode(&plain_text(other, options)),
        })
        .join(ARRAY_SEPARATOR)
}

fn plain_text(value: &Value, options: &FilterOptions) -> String {
    match value {
        Value::Absent => String::new(),
        Value::Null => NULL_LITERAL.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => s.clone(),
        Value::Date(dt) => format_date(dt, options.include_timestamp),
        Value::Array(values) => values
            .iter()
            .filter(|v| !v.is_absent())
            .map(|v| plain_text(v, options))
            .join(ARRAY_SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn encode(value: impl Into<Value>) -> EncodedValue {
        encode_value(&value.into(), &FilterOptions::default())
    }

    #[test]
    fn test_percent_encode_keeps_unreserved_marks() {
        assert_eq!(percent_encode("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(percent_encode("\"a b\""), "%22a%20b%22");
        assert_eq!(percent_encode(">="), "%3E%3D");
        assert_eq!(percent_encode(", "), "%2C%20");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn test_escape_backslash_before_quote() {
        assert_eq!(escape(r#"a\b"#), r#"a\\b"#);
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn test_encode_string() {
        assert_eq!(
            encode("abc"),
            EncodedValue { value: "abc".to_string(), should_quote: true }
        );
        assert_eq!(encode(r#"a"b"#).value, r#"a\"b"#);
    }

    #[test]
    fn test_encode_numbers() {
        assert_eq!(encode(42), EncodedValue { value: "42".to_string(), should_quote: false });
        assert_eq!(encode(-7i64).value, "-7");
        assert_eq!(encode(1.5).value, "1.5");
        assert_eq!(encode(10.0).value, "10");
        assert_eq!(encode(-0.0).value, "0");
        assert_eq!(encode(f64::NAN).value, "NaN");
        assert_eq!(encode(f64::INFINITY).value, "Infinity");
        assert_eq!(encode(f64::NEG_INFINITY).value, "-Infinity");
    }

    #[test]
    fn test_encode_f32_uses_shortest_form() {
        assert_eq!(encode(0.1f32).value, "0.1");
        assert_eq!(encode(2.5f32).value, "2.5");
        assert_eq!(encode(3.0f32).value, "3");
    }

    #[test]
    fn test_encode_wide_integers() {
        assert_eq!(encode(5u64).value, "5");
        assert_eq!(encode(12usize).value, "12");
    }

    #[test]
    fn test_float_exponent_form_at_extremes() {
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-1.5e25), "-1.5e+25");
        assert_eq!(format_float(1e20), "100000000000000000000");
        assert_eq!(format_float(1e-7), "1e-7");
        assert_eq!(format_float(-2.5e-8), "-2.5e-8");
        assert_eq!(format_float(0.000001), "0.000001");
    }

    #[test]
    fn test_encode_bool_null_absent() {
        assert_eq!(encode(true), EncodedValue { value: "true".to_string(), should_quote: false });
        assert_eq!(encode(false).value, "false");
        assert_eq!(encode(()), EncodedValue { value: "null".to_string(), should_quote: false });
        assert_eq!(encode(Value::Absent), EncodedValue::default());
    }

    #[test]
    fn test_encode_date_only_uses_local_calendar() {
        let date = Local.with_ymd_and_hms(2023, 1, 5, 10, 0, 0).unwrap();
        let encoded = encode(date);
        assert_eq!(encoded.value, "2023-01-05");
        assert!(encoded.should_quote);
    }

    #[test]
    fn test_encode_date_with_timestamp_uses_utc() {
        let date = Utc.with_ymd_and_hms(2023, 1, 5, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(6);
        let options = FilterOptions { include_timestamp: true };
        let encoded = encode_value(&Value::from(date), &options);
        assert_eq!(encoded.value, "2023-01-05T03:04:05.006Z");
        assert!(encoded.should_quote);
    }

    #[test]
    fn test_encode_array_elementwise() {
        let encoded = encode(vec![
            Value::from(1),
            Value::from("a b"),
            Value::Absent,
            Value::from(true),
            Value::from(r#"q"t"#),
        ]);
        assert_eq!(encoded.value, "1,a%20b,true,q%5C%22t");
        assert!(!encoded.should_quote);
    }

    #[test]
    fn test_encode_empty_array() {
        assert_eq!(encode(Vec::<i32>::new()).value, "");
        assert_eq!(encode(vec![None::<i32>, None]).value, "");
    }

    #[test]
    fn test_encode_nested_array_as_unit() {
        let nested = Value::Array(vec![Value::from(vec!["x", "y"]), Value::Null]);
        assert_eq!(encode(nested).value, "x%2Cy,null");
    }
}
