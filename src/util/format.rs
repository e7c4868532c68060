//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price in dollars with two decimal places.
#[must_use]
pub fn price(value: f64) -> String {
    format!("${value:.2}")
}

/// Zero-pad a countdown component to two digits.
#[must_use]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}
