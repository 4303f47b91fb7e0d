//! Formatting utilities used for CLI and export outputs.

use crate::models::gasto::Moneda;

/// Two decimals with thousands separators: 45230.5 -> "45,230.50".
pub fn amount(value: f64) -> String {
    let neg = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let int = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{grouped}.{frac:02}", if neg { "-" } else { "" })
}

pub fn money(value: f64, moneda: Moneda) -> String {
    format!("{} {}", moneda.symbol(), amount(value))
}

pub fn soles(value: f64) -> String {
    money(value, Moneda::Pen)
}

pub fn dolares(value: f64) -> String {
    money(value, Moneda::Usd)
}

/// Decimal hours as "08h 30m".
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

pub fn meters(m: u64) -> String {
    if m >= 10_000 {
        format!("{:.1} km", m as f64 / 1000.0)
    } else {
        format!("{m} m")
    }
}

/// Distance cell, suffixed with `≠` when the stored verdict disagrees.
pub fn flagged_meters(m: u64, mismatch: bool) -> String {
    if mismatch {
        format!("{} ≠", meters(m))
    } else {
        meters(m)
    }
}

pub fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}
