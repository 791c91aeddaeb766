//! HTML fragment builders.
//!
//! Provider strings are escaped before they are placed into markup.

use crate::domain::dca::DcaSimulationResult;
use crate::domain::market::TradingPairRecord;

pub const NOT_AVAILABLE: &str = "N/A";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fixed-point text with `digits` fraction digits. Exact halfway values round
/// away from zero (`0.125` -> `0.13`), unlike `{:.2}` which rounds them to even.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_finite() && is_exact_tie(value, digits) {
        // The next float away from zero is past the tie, so rounding goes outward
        return format!("{:.*}", digits, f64::from_bits(value.to_bits() + 1));
    }
    format!("{:.*}", digits, value)
}

/// Whether `value * 10^digits` lies exactly halfway between two integers.
///
/// With `value = odd * 2^-k`, that holds exactly when `k == digits + 1`.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let bits = value.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, power) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    let k = -(power + i64::from(mantissa.trailing_zeros()));
    k == digits as i64 + 1
}

/// en-US style number: comma grouping, at most three fraction digits,
/// trailing zeros dropped (`1234567.5` -> `1,234,567.5`).
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// The provider's `priceUsd` string as-is (escaped), or `N/A`
pub fn price_text(pair: &TradingPairRecord) -> String {
    match pair.price_usd.as_deref().map(str::trim) {
        Some(price) if !price.is_empty() => escape_html(price),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `<p>header</p><ul><li>..</li>..</ul>`; the header is trusted markup
pub fn list_fragment<I>(header: Option<&str>, items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut html = String::new();
    if let Some(header) = header {
        html.push_str("<p>");
        html.push_str(header);
        html.push_str("</p>");
    }
    html.push_str("<ul>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&item);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

pub fn error_fragment(section: &str, reason: &str) -> String {
    format!(
        "<p class=\"error\">Unable to load {}: {}</p>",
        escape_html(section),
        escape_html(reason)
    )
}

pub fn message_fragment(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}

pub fn dca_fragment(result: &DcaSimulationResult) -> String {
    format!(
        "<p>Total Invested: ${}</p><p>Total Tokens: {}</p><p>Avg Buy Price: ${}</p><p>Current Price: ${}</p>",
        result.total_invested,
        to_fixed(result.total_tokens, 4),
        to_fixed(result.avg_price, 2),
        to_fixed(result.current_price, 2)
    )
}
