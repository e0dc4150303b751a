//! Formats money and dates the way Brazilian (pt-BR) users expect to read them.

use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{OffsetDateTimeExt, Tz};

const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Format `amount` as Brazilian reais, e.g. `1234.56` becomes "R$ 1.234,56".
///
/// The amount is rounded to the nearest cent. Negative amounts are prefixed
/// with a minus sign, e.g. "-R$ 12,30". NaN and infinite amounts render as "R$ -".
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        tracing::error!("cannot format {amount} as currency");
        return format!("{CURRENCY_SYMBOL} -");
    }

    let mut whole = amount.abs().trunc();
    let mut cents = ((amount.abs() - whole) * 100.0).round();
    if cents >= 100.0 {
        whole += 1.0;
        cents = 0.0;
    }

    // Amounts that round to zero should not render as "-R$ 0,00".
    let sign = if amount < 0.0 && (whole > 0.0 || cents > 0.0) {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{CURRENCY_SYMBOL} {},{cents:02.0}",
        group_thousands(&format!("{whole:.0}"))
    )
}

/// Insert a separator between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}

/// Format the calendar date of `date_time` in `timezone` as day/month/year,
/// e.g. "24/05/2020".
///
/// The UTC offset is the one in effect at `date_time`, so dates on either side
/// of a daylight saving change land on the right day.
pub fn format_date(date_time: OffsetDateTime, timezone: &Tz) -> String {
    let local_date_time = date_time.to_timezone(timezone);

    local_date_time.format(DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format date {local_date_time}: {error}");
        local_date_time.date().to_string()
    })
}
