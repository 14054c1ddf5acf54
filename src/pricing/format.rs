use crate::pricing::constants::{
    CURRENCY_DECIMALS, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMAL_SEPARATOR,
    DEFAULT_THOUSANDS_SEPARATOR,
};

/// Display rules for monetary amounts.
///
/// Amounts are rounded half away from zero to cents. An empty symbol yields a
/// bare number such as `1,234.50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
        }
    }
}

impl CurrencyFormat {
    /// Bare `1,234.50` style: no symbol, `.` for cents, `,` between thousands.
    pub fn plain() -> Self {
        Self {
            symbol: String::new(),
            decimal_separator: '.',
            thousands_separator: ',',
        }
    }

    /// Format an amount for display.
    pub fn format_value(&self, value: f64) -> String {
        let scale = 10u64.pow(CURRENCY_DECIMALS);
        let cents = (value.abs() * scale as f64).round() as u64;
        let whole = cents / scale;
        let fraction = cents % scale;

        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        let digits = group_thousands(whole, self.thousands_separator);

        let number = format!(
            "{}{}{:0width$}",
            digits,
            self.decimal_separator,
            fraction,
            width = CURRENCY_DECIMALS as usize
        );

        if self.symbol.is_empty() {
            format!("{}{}", sign, number)
        } else {
            format!("{}{} {}", sign, self.symbol, number)
        }
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}
