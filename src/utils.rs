//! Small helpers.

use serde::Serializer;

pub fn sanitize_symbol(sym: &str) -> String {
    sym.trim().to_uppercase()
}

/// JSON has no infinity; unbounded ratios are written as the string "inf".
pub fn serialize_ratio<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    if v.is_infinite() {
        s.serialize_str(if *v > 0.0 { "inf" } else { "-inf" })
    } else {
        s.serialize_f64(*v)
    }
}

/// Two decimals, or "inf" for an unbounded ratio.
pub fn fmt_ratio(v: f64) -> String {
    if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        s.to_string()
    } else {
        format!("{v:.2}")
    }
}

pub fn fmt_usd(v: f64) -> String {
    if v < 0.0 {
        format!("-${:.2}", -v)
    } else {
        format!("${v:.2}")
    }
}
