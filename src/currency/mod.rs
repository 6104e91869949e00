use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Display preferences for money amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub symbol: String,
    pub negative_style: NegativeStyle,
    pub grouping: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            negative_style: NegativeStyle::Sign,
            grouping: false,
        }
    }
}

const PRECISION: usize = 2;

/// Formats `amount` with two decimals and the configured symbol.
pub fn format_currency_value(amount: f64, options: &FormatOptions) -> String {
    let body = format_number(amount.abs(), options.grouping);
    // -0.0 and values that round to zero print without a sign
    let negative = amount < 0.0
        && !body
            .trim_start_matches(|ch| matches!(ch, '0' | '.' | ','))
            .is_empty();
    if !negative {
        return format!("{}{}", options.symbol, body);
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{}{}", options.symbol, body),
        NegativeStyle::Parentheses => format!("({}{})", options.symbol, body),
    }
}

fn format_number(value: f64, grouping: bool) -> String {
    let fixed = format!("{:.*}", PRECISION, value);
    if !grouping {
        return fixed;
    }
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if fraction.is_empty() {
        grouped
    } else {
        format!("{grouped}.{fraction}")
    }
}
