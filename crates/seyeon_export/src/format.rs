//! Display formatting for listing values.
//!
//! All formatters are stateless; `Accounting` only carries its settings.

use bon::Builder;

/// Renders money amounts as `$1,234,567.89`.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Accounting {
    #[builder(default = String::from("$"))]
    pub symbol: String,
    #[builder(default = 2)]
    pub precision: usize,
    #[builder(default = ',')]
    pub thousand: char,
    #[builder(default = '.')]
    pub decimal: char,
}

impl Default for Accounting {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Accounting {
    /// Negative amounts put the sign before the symbol: `-$12.00`.
    pub fn format_money(&self, value: f64) -> String {
        let body = grouped(value.abs(), self.precision, self.thousand, self.decimal);
        if value < 0.0 {
            format!("-{}{}", self.symbol, body)
        } else {
            format!("{}{}", self.symbol, body)
        }
    }
}

/// `$` and two decimals, no grouping.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// English locale `%f`: grouped integer part and six decimals.
pub fn format_decimal(value: f64) -> String {
    let body = grouped(value.abs(), 6, ',', '.');
    if value < 0.0 { format!("-{body}") } else { body }
}

fn grouped(value: f64, precision: usize, thousand: char, decimal: char) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{value:.precision$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(thousand);
        }
        out.push(digit);
    }
    if let Some(frac_part) = frac_part {
        out.push(decimal);
        out.push_str(frac_part);
    }
    out
}
