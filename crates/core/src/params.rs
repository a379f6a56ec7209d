//! Pure helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Each helper takes a JSON object, a key, and a default. A missing key or
//! wrong-typed value falls back to the default; these never fail. Scene
//! presets and hosts use them to layer overrides onto stock configurations.

use crate::color::Srgb;
use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds for non-negative JSON integers.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// Extracts a hex color from `params[name]`, returning `default` if the key
/// is missing, wrong-typed, or not parseable as a color.
pub fn param_color(params: &Value, name: &str, default: Srgb) -> Srgb {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Srgb::from_hex(s).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"trail_alpha": 0.1});
        assert!((param_f64(&params, "trail_alpha", 0.0) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"trail_alpha": 1});
        assert!((param_f64(&params, "trail_alpha", 0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "trail_alpha", 0.5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"trail_alpha": "thick"});
        assert!((param_f64(&params, "trail_alpha", 0.5) - 0.5).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"count": 50});
        assert_eq!(param_usize(&params, "count", 0), 50);
    }

    #[test]
    fn param_usize_rejects_negative_values() {
        let params = json!({"count": -5});
        assert_eq!(param_usize(&params, "count", 10), 10);
    }

    #[test]
    fn param_usize_returns_default_when_missing() {
        assert_eq!(param_usize(&json!({}), "count", 50), 50);
    }

    #[test]
    fn param_usize_rejects_float_values() {
        let params = json!({"count": 5.5});
        assert_eq!(param_usize(&params, "count", 1), 1);
    }

    // -- param_bool --

    #[test]
    fn param_bool_extracts_existing_value() {
        let params = json!({"paused": true});
        assert!(param_bool(&params, "paused", false));
    }

    #[test]
    fn param_bool_returns_default_when_missing_or_wrong_type() {
        assert!(param_bool(&json!({}), "paused", true));
        assert!(!param_bool(&json!({"paused": "yes"}), "paused", false));
    }

    // -- param_string --

    #[test]
    fn param_string_extracts_existing_value() {
        let params = json!({"palette": "signal"});
        assert_eq!(param_string(&params, "palette", "cyan"), "signal");
    }

    #[test]
    fn param_string_returns_default_when_missing() {
        assert_eq!(param_string(&json!({}), "palette", "cyan"), "cyan");
    }

    #[test]
    fn param_string_returns_default_when_wrong_type() {
        let params = json!({"palette": 3});
        assert_eq!(param_string(&params, "palette", "cyan"), "cyan");
    }

    // -- param_color --

    #[test]
    fn param_color_extracts_valid_hex() {
        let params = json!({"trail_color": "#ff6b6b"});
        let color = param_color(&params, "trail_color", Srgb::BLACK);
        assert_eq!(color.to_hex(), "#ff6b6b");
    }

    #[test]
    fn param_color_returns_default_for_bad_hex() {
        let params = json!({"trail_color": "reddish"});
        assert_eq!(param_color(&params, "trail_color", Srgb::BLACK), Srgb::BLACK);
    }

    #[test]
    fn param_color_returns_default_when_missing() {
        assert_eq!(param_color(&json!({}), "trail_color", Srgb::BLACK), Srgb::BLACK);
    }

    #[test]
    fn helpers_ignore_non_object_values() {
        let params = json!(42);
        assert_eq!(param_usize(&params, "count", 7), 7);
        assert!((param_f64(&params, "trail_alpha", 0.25) - 0.25).abs() < f64::EPSILON);
        assert_eq!(param_string(&params, "palette", "mono"), "mono");
    }
}
