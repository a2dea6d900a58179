//! Formatting utilities used for CLI outputs.

use ansi_term::Colour;

/// Format minutes as `HHh MMm` (or `HH:MM` when `short`), optionally signed.
pub fn mins2readable(mins: f64, want_sign: bool, short: bool) -> String {
    let total = mins.round() as i64;
    let abs_m = total.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if total > 0 && want_sign {
        "+"
    } else if total < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Overtime in green, undertime in red, zero uncoloured.
pub fn colorize_overtime(mins: f64) -> String {
    let text = mins2readable(mins, true, false);
    if mins.round() > 0.0 {
        Colour::Green.paint(text).to_string()
    } else if mins.round() < 0.0 {
        Colour::Red.paint(text).to_string()
    } else {
        text
    }
}

pub fn optional_time(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}
