//! Leitura leniente de números que a API às vezes manda como string
//! (`"12.50"`) e às vezes como número.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lê o maior prefixo numérico de `s`, como o `parseFloat` do JavaScript.
///
/// `"12.5%"` → `12.5`, `"  7e2px"` → `700.0`, `"abc"` → `None`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut k = frac_start;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        digits += k - frac_start;
        i = k;
    }

    if digits == 0 {
        return None;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut k = i + 1;
        if k < b.len() && (b[k] == b'+' || b[k] == b'-') {
            k += 1;
        }
        let exp_start = k;
        while k < b.len() && b[k].is_ascii_digit() {
            k += 1;
        }
        if k > exp_start {
            i = k;
        }
    }

    let literal = t[..i].trim_end_matches('.');
    literal.parse::<f64>().ok()
}

/// Valor numérico de um escalar JSON qualquer; o que não for número vira `0.0`.
pub fn value_to_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_float_prefix(s).unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

/// Para `#[serde(deserialize_with = "...")]`, sobre [`value_to_f64`].
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value))
}

/// Contagens às vezes chegam como string (`"42"`) dos agregados SQL.
pub fn deserialize_lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let n = match &value {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| value_to_f64(&value).max(0.0) as u64),
        _ => value_to_f64(&value).max(0.0) as u64,
    };
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.5"), Some(12.5));
        assert_eq!(parse_float_prefix("  7.25%"), Some(7.25));
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix("7e2px"), Some(700.0));
        assert_eq!(parse_float_prefix("5e"), Some(5.0));
        assert_eq!(parse_float_prefix("10."), Some(10.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_value_to_f64() {
        assert_eq!(value_to_f64(&json!(3.5)), 3.5);
        assert_eq!(value_to_f64(&json!("40.00")), 40.0);
        assert_eq!(value_to_f64(&json!("n/a")), 0.0);
        assert_eq!(value_to_f64(&json!(null)), 0.0);
    }

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_lenient_f64")]
        rate: f64,
        #[serde(deserialize_with = "deserialize_lenient_u64")]
        count: u64,
    }

    #[test]
    fn test_lenient_fields() {
        let s: Sample = serde_json::from_value(json!({"rate": "33.3", "count": "12"})).unwrap();
        assert_eq!(s.rate, 33.3);
        assert_eq!(s.count, 12);

        let s: Sample = serde_json::from_value(json!({"rate": 1, "count": 7})).unwrap();
        assert_eq!(s.rate, 1.0);
        assert_eq!(s.count, 7);
    }
}
