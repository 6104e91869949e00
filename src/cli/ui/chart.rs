//! Terminal bar chart of income against expenses.

use colored::Colorize;

use crate::currency::{format_currency_value, FormatOptions};

const MIN_WIDTH: usize = 10;
const MAX_WIDTH: usize = 60;
/// Columns reserved for the label, separators and the value column.
const RESERVED_COLUMNS: usize = 32;
const POSITIVE_CELL: char = '█';
const NEGATIVE_CELL: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: BarColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub axis_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Income in green, expenses in red.
    pub fn budget(income: f64, expenses: f64, options: &FormatOptions) -> Self {
        Self {
            title: "Budget Overview".into(),
            axis_label: format!("Amount ({})", options.symbol),
            bars: vec![
                Bar {
                    label: "Income".into(),
                    value: income,
                    color: BarColor::Green,
                },
                Bar {
                    label: "Expenses".into(),
                    value: expenses,
                    color: BarColor::Red,
                },
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: usize,
    pub color: bool,
    pub format: FormatOptions,
}

/// Bar width for the current terminal, or `configured` when set.
pub fn chart_width(configured: Option<u16>) -> usize {
    if let Some(width) = configured {
        return usize::from(width).clamp(1, MAX_WIDTH * 2);
    }
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns).saturating_sub(RESERVED_COLUMNS))
        .unwrap_or(MAX_WIDTH)
        .clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Number of cells for `value` when `max` fills `width` cells.
fn bar_length(value: f64, max: f64, width: usize) -> usize {
    let magnitude = value.abs();
    if width == 0 || magnitude == 0.0 || !magnitude.is_finite() {
        return 0;
    }
    if !max.is_finite() || max <= 0.0 {
        return 0;
    }
    let cells = ((magnitude / max) * width as f64).round() as usize;
    cells.clamp(1, width)
}

pub fn render_bar_chart(chart: &BarChart, style: &ChartStyle) -> String {
    let max = chart
        .bars
        .iter()
        .map(|bar| bar.value.abs())
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = chart
        .bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);

    let title = format!("=== {} ===", chart.title);
    let mut lines = vec![if style.color {
        title.bold().to_string()
    } else {
        title
    }];

    for bar in &chart.bars {
        let cells = bar_length(bar.value, max, style.width);
        let cell = if bar.value < 0.0 {
            NEGATIVE_CELL
        } else {
            POSITIVE_CELL
        };
        let filled: String = std::iter::repeat(cell).take(cells).collect();
        let filled = if style.color {
            match bar.color {
                BarColor::Green => filled.green().to_string(),
                BarColor::Red => filled.red().to_string(),
            }
        } else {
            filled
        };
        let padding = " ".repeat(style.width - cells);
        lines.push(format!(
            "{:<label_width$} | {}{} {}",
            bar.label,
            filled,
            padding,
            format_currency_value(bar.value, &style.format),
        ));
    }

    lines.push(format!(
        "{:<label_width$} +{}",
        "",
        "-".repeat(style.width + 1)
    ));
    lines.push(format!("{:<label_width$}   {}", "", chart.axis_label));
    lines.join("\n")
}
