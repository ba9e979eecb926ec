//! Per-cell value formatting.
//!
//! Which treatment a value gets is decided by its column key alone, so the
//! classification and the numeric formatters stay pure; only the date path
//! touches the browser (locale-local rendering via `js_sys::Date`).

use serde_json::Value;

/// Rendered for null and absent fields, including schema mismatches.
pub const PLACEHOLDER: &str = "-";

const CURRENCY_KEYS: [&str; 5] = ["msrp", "price", "amount", "retail_price", "your_price"];

const QUANTITY_KEYS: [&str; 7] = [
    "quantity",
    "received_qty",
    "pending_qty",
    "total_qty",
    "weight_per_unit",
    "cube_per_unit",
    "fulfilled_cube",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Currency,
    Quantity,
    Date,
    Text,
}

pub fn classify(key: &str) -> CellKind {
    if CURRENCY_KEYS.contains(&key) {
        CellKind::Currency
    } else if QUANTITY_KEYS.contains(&key) {
        CellKind::Quantity
    } else if key.contains("date") || key.contains("updated") || key == "received_at" {
        CellKind::Date
    } else {
        CellKind::Text
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `19.5` for a currency key renders as `"$19.50"`.
pub fn format_currency(value: &Value) -> Option<String> {
    as_number(value).map(|n| format!("${n:.2}"))
}

/// Quantities get thousands grouping, e.g. `1234` renders as `"1,234"`.
pub fn format_quantity(value: &Value) -> Option<String> {
    as_number(value).map(group_thousands)
}

/// Comma-group the integer digits, keeping up to three fraction digits with
/// trailing zeros trimmed (`toLocaleString` parity).
pub fn group_thousands(n: f64) -> String {
    let mut digits = format!("{:.3}", n.abs());
    let dot = digits.find('.').unwrap_or(digits.len());
    let fraction = digits.split_off(dot);
    let fraction = fraction.trim_end_matches('0').trim_end_matches('.');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0.0 && (digits != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}{fraction}")
}

/// Render one cell for column `key`. Absent and null values render the
/// placeholder dash; values a formatter cannot interpret fall through as raw
/// text rather than failing the render.
pub fn format_cell(key: &str, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return PLACEHOLDER.to_string();
    };
    if value.is_null() {
        return PLACEHOLDER.to_string();
    }
    match classify(key) {
        CellKind::Currency => format_currency(value).unwrap_or_else(|| raw_text(value)),
        CellKind::Quantity => format_quantity(value).unwrap_or_else(|| raw_text(value)),
        CellKind::Date => format_date(value),
        CellKind::Text => raw_text(value),
    }
}

/// Locale-local date rendering. Unparseable values fall back to the raw text
/// instead of crashing the renderer.
fn format_date(value: &Value) -> String {
    let raw = raw_text(value);
    let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(&raw));
    if parsed.get_time().is_nan() {
        raw
    } else {
        String::from(parsed.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classification() {
        assert_eq!(classify("price"), CellKind::Currency);
        assert_eq!(classify("your_price"), CellKind::Currency);
        assert_eq!(classify("quantity"), CellKind::Quantity);
        assert_eq!(classify("fulfilled_cube"), CellKind::Quantity);
        assert_eq!(classify("next_availability_date"), CellKind::Date);
        assert_eq!(classify("last_updated"), CellKind::Date);
        assert_eq!(classify("received_at"), CellKind::Date);
        assert_eq!(classify("sku"), CellKind::Text);
        assert_eq!(classify("vendor"), CellKind::Text);
    }

    #[test]
    fn currency_gets_two_decimals() {
        assert_eq!(format_cell("price", Some(&json!(19.5))), "$19.50");
        assert_eq!(format_cell("msrp", Some(&json!("129.999"))), "$130.00");
        assert_eq!(format_cell("amount", Some(&json!(0))), "$0.00");
    }

    #[test]
    fn null_and_absent_render_placeholder() {
        assert_eq!(format_cell("price", Some(&json!(null))), PLACEHOLDER);
        assert_eq!(format_cell("anything", None), PLACEHOLDER);
    }

    #[test]
    fn quantity_gets_grouping() {
        assert_eq!(format_cell("quantity", Some(&json!(1234))), "1,234");
        assert_eq!(format_cell("total_qty", Some(&json!("1234567"))), "1,234,567");
        assert_eq!(format_cell("weight_per_unit", Some(&json!(12.5))), "12.5");
        assert_eq!(format_cell("quantity", Some(&json!(999))), "999");
    }

    #[test]
    fn grouping_edges() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(0.5), "0.5");
        assert_eq!(group_thousands(1234.5678), "1,234.568");
        assert_eq!(group_thousands(-1234.0), "-1,234");
    }

    #[test]
    fn non_numeric_values_fall_through_as_raw_text() {
        assert_eq!(format_cell("price", Some(&json!("n/a"))), "n/a");
        assert_eq!(format_cell("quantity", Some(&json!(""))), "");
    }

    #[test]
    fn plain_keys_render_as_is() {
        assert_eq!(format_cell("sku", Some(&json!("BH-1001"))), "BH-1001");
        assert_eq!(format_cell("po_number", Some(&json!(42))), "42");
    }
}
