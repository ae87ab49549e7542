// web_app/format.rs - Display formatting for amounts and dates

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// `1234.5` -> `"1,234.50 €"`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{} €", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Sent dates are shown day first
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%d/%m/%Y").to_string()
}
