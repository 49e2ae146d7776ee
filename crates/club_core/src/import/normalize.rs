use serde_json::Value;

/// Fold full-width digits (０-９) to their ASCII counterparts.
///
/// Rosters typed on Japanese or Korean IMEs routinely arrive with
/// full-width numerals that `str::parse` rejects.
pub(crate) fn normalize_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '０'..='９' => (b'0' + (c as u32 - '０' as u32) as u8) as char,
            _ => c,
        })
        .collect()
}

/// True when a jersey field is effectively missing: absent, null, or a
/// string that trims to nothing.
pub(crate) fn jersey_is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Parse a jersey field (JSON string or number) into a jersey number.
///
/// Accepts only finite, positive integers. On failure returns the
/// offending raw text for the skip reason.
pub(crate) fn parse_jersey(value: &Value) -> Result<u32, String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => normalize_digits(s.trim()).parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n > 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => {
            Ok(n as u32)
        }
        _ => Err(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_width_digits() {
        assert_eq!(normalize_digits("１０"), "10");
        assert_eq!(normalize_digits("７番"), "7番");
        assert_eq!(normalize_digits("42"), "42");
    }

    #[test]
    fn test_parse_jersey_accepts_numbers_and_strings() {
        assert_eq!(parse_jersey(&json!(10)), Ok(10));
        assert_eq!(parse_jersey(&json!("10")), Ok(10));
        assert_eq!(parse_jersey(&json!(" 7 ")), Ok(7));
        assert_eq!(parse_jersey(&json!("１０")), Ok(10));
    }

    #[test]
    fn test_parse_jersey_rejects_garbage() {
        assert_eq!(parse_jersey(&json!("abc")), Err("abc".to_string()));
        assert_eq!(parse_jersey(&json!(0)), Err("0".to_string()));
        assert_eq!(parse_jersey(&json!(-3)), Err("-3".to_string()));
        assert_eq!(parse_jersey(&json!(7.5)), Err("7.5".to_string()));
        assert_eq!(parse_jersey(&json!(true)), Err("true".to_string()));
    }

    #[test]
    fn test_jersey_blank_detection() {
        assert!(jersey_is_blank(None));
        assert!(jersey_is_blank(Some(&Value::Null)));
        assert!(jersey_is_blank(Some(&json!("   "))));
        assert!(!jersey_is_blank(Some(&json!("10"))));
        assert!(!jersey_is_blank(Some(&json!(10))));
    }
}
