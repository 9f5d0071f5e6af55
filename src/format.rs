//! Display Formatting
//!
//! French short dates (`4 Avr. 04`) and status labels.

use chrono::{Datelike, NaiveDate};

use crate::models::BillStatus;

/// Month abbreviations, distinct so the short form parses back
const MONTHS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

/// Two-digit years below this belong to the 2000s
const CENTURY_PIVOT: i32 = 70;

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}

/// Inverse of `format_date` for years 1970..=2069
pub fn parse_display_date(display: &str) -> Option<NaiveDate> {
    let mut parts = display.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month = parts.next()?;
    let month = MONTHS.iter().position(|m| *m == month)? as u32 + 1;
    let yy: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0..100).contains(&yy) {
        return None;
    }
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn status_label(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}

/// Amounts are shown as entered, without trailing `.0`
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a.fract() == 0.0 => format!("{} €", a as i64),
        Some(a) => format!("{:.2} €", a),
        None => "-".to_string(),
    }
}
