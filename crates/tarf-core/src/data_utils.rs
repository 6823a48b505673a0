//! Polars `AnyValue` conversions used by the row-wise passes.

use polars::prelude::AnyValue;

/// String form of a cell; Null becomes the empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(v) => v.to_string(),
        AnyValue::StringOwned(v) => v.to_string(),
        AnyValue::Boolean(v) => if v { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

/// Numeric form of a cell; Null, non-numeric strings, and other
/// non-numeric values become None.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(v) => parse_f64(v),
        AnyValue::StringOwned(v) => parse_f64(&v),
        _ => None,
    }
}

/// Integer form of a cell, truncating floats.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::String(v) => parse_i64(v),
        AnyValue::StringOwned(v) => parse_i64(&v),
        other => any_to_f64(other).map(|v| v as i64),
    }
}

pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_empty_string_and_no_number() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn strings_parse_numerically() {
        assert_eq!(any_to_f64(AnyValue::String(" 39.08 ")), Some(39.08));
        assert_eq!(any_to_f64(AnyValue::String("Yes")), None);
        assert_eq!(any_to_i64(AnyValue::String("61")), Some(61));
    }
}
