//! Per-field rules. Each one takes the raw JSON value and returns the native value or
//! the message to report.

use chrono::NaiveDate;
use serde_json::Value;
use std::str::FromStr;

pub fn non_empty_text(name: &str, value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) if s.is_empty() => Err(format!("O campo '{}' não pode ser vazio.", name)),
        Value::String(s) => Ok(s.clone()),
        _ => Err(format!("O campo '{}' deve ser uma string.", name)),
    }
}

/// Membership in a closed set of lowercase strings. `message` lists the allowed values.
pub fn one_of<E: FromStr>(value: &Value, message: &str) -> Result<E, String> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| message.to_string())
}

/// A `YYYY-MM-DD` date no later than `today`. Month and day must be zero-padded.
pub fn past_or_present_date(
    name: &str,
    value: &Value,
    today: NaiveDate,
    future_message: &str,
) -> Result<NaiveDate, String> {
    let date = value
        .as_str()
        .filter(|s| s.len() == 10)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .ok_or_else(|| format!("O campo '{}' deve ser uma data válida (AAAA-MM-DD).", name))?;
    if date > today {
        return Err(future_message.to_string());
    }
    Ok(date)
}

/// A positive integer given as a JSON number or a numeric string.
pub fn positive_integer(value: &Value, message: &str) -> Result<u64, String> {
    let number = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    };
    number.filter(|n| *n > 0).ok_or_else(|| message.to_string())
}

fn whole(f: f64) -> Option<u64> {
    (f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}
