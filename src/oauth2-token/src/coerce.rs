// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar coercions for loosely typed token response fields.
//!
//! Some authorization servers send numbers as strings, or strings as numbers.
//! These helpers convert a JSON value into the type the [Token] needs.
//!
//! [Token]: crate::token::Token

use serde_json::Value;

/// Converts `value` to an integer, accepting only numeric values.
///
/// Numbers with a fractional part, numbers outside the `i64` range, and
/// strings that are not entirely an integer return `None`.
pub(crate) fn strict_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Converts `value` to an integer, never failing.
///
/// Floating point numbers are truncated towards zero. Strings use their
/// longest numeric prefix, so `"12abc"` is `12`. Booleans map to `0` and `1`.
/// Anything without a numeric interpretation is `0`.
pub(crate) fn lenient_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => numeric_prefix(s)
            .and_then(|p| p.parse::<f64>().ok())
            .map(|f| f as i64)
            .unwrap_or_default(),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Converts a scalar `value` to its string form.
///
/// Returns `None` for arrays and objects, which have no sensible string form.
pub(crate) fn string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) | Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

// Returns the longest prefix of `s` (after leading whitespace) that reads as a
// decimal number, with optional sign, fraction and exponent.
fn numeric_prefix(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    end = digits(end);
    let mut mantissa = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits(end + 1);
        mantissa |= frac_end > end + 1;
        if mantissa {
            end = frac_end;
        }
    }
    if !mantissa {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(&s[..end])
}
