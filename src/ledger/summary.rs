use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::currency::{format_currency_value, FormatOptions};

/// Result of a `remove_expense` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RemoveOutcome {
    Removed,
    NothingToRemove,
}

/// Point-in-time totals of a ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub deposit_count: Value,
    pub expense_count: Value,
}

impl Summary {
    pub fn render(&self, options: &FormatOptions) -> String {
        let money = |amount: f64| format_currency_value(amount, options);
        format!(
            "Total Income: {}\nTotal Expenses: {}\nCurrent Balance: {}\nDeposits: {}\nExpenses recorded: {}",
            money(self.total_income),
            money(self.total_expenses),
            money(self.balance),
            self.deposit_count,
            self.expense_count,
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FormatOptions::default()))
    }
}

/// Full transaction history alongside the counters and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionHistory {
    pub entries: Vec<f64>,
    pub deposit_count: Value,
    pub expense_count: Value,
    pub summary: Summary,
}

impl TransactionHistory {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, options: &FormatOptions) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        if self.is_empty() {
            lines.push("No transactions recorded.".to_string());
        }
        for (index, amount) in self.entries.iter().enumerate() {
            let kind = if *amount < 0.0 { "expense" } else { "income" };
            lines.push(format!(
                "{:>3}. {:<8} {}",
                index + 1,
                kind,
                format_currency_value(*amount, options)
            ));
        }
        lines.push(String::new());
        lines.push(self.summary.render(options));
        lines.join("\n")
    }
}

impl fmt::Display for TransactionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FormatOptions::default()))
    }
}
