//! Float encoding for strict JSON targets.
//!
//! JSON has no literal for NaN or the infinities, so those are written as
//! strings holding their canonical text instead.
use crate::sink::JsonSink;
use serde_json::{Number, Value};

/// Canonical text for a non-finite value, `None` for finite ones.
pub fn non_finite_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

pub fn encode_float(value: f64) -> Value {
    match non_finite_text(value) {
        Some(text) => Value::String(text.to_string()),
        None => Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

/// Writes `value` as a number, or as its canonical string when not finite.
pub fn write_float(sink: &mut dyn JsonSink, name: &str, value: f64) {
    match non_finite_text(value) {
        Some(text) => sink.write_str(name, text),
        None => sink.write_f64(name, value),
    }
}
