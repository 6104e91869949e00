use serde_json::Value;

use super::{
    counter::Counter,
    summary::{RemoveOutcome, Summary, TransactionHistory},
};

/// Running income/expense tracker for a single owner.
///
/// Every operation is an immediate field update. Nothing here fails: amounts
/// are taken as given, including zero and negative values.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    owner_name: String,
    total_income: f64,
    total_expenses: f64,
    deposit_count: Counter,
    expense_count: Counter,
    transaction_log: Vec<f64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner(name: impl Into<String>) -> Self {
        Self {
            owner_name: name.into(),
            ..Self::default()
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn set_owner_name(&mut self, name: impl Into<String>) {
        self.owner_name = name.into();
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expenses(&self) -> f64 {
        self.total_expenses
    }

    /// Signed amounts in insertion order: income positive, expenses negative.
    pub fn transaction_log(&self) -> &[f64] {
        &self.transaction_log
    }

    pub fn record_income(&mut self, amount: f64) {
        self.total_income += amount;
        if !self.deposit_count.increment() {
            tracing::warn!(count = %self.deposit_count.raw(), "deposit count is not numeric");
        }
        self.transaction_log.push(amount);
        tracing::debug!(amount, total = self.total_income, "income recorded");
    }

    pub fn record_expense(&mut self, amount: f64) {
        self.total_expenses += amount;
        if !self.expense_count.increment() {
            tracing::warn!(count = %self.expense_count.raw(), "expense count is not numeric");
        }
        self.transaction_log.push(-amount);
        tracing::debug!(amount, total = self.total_expenses, "expense recorded");
    }

    /// Takes `amount` off the expense total and drops one from the expense
    /// count. The total may go negative. The log keeps the original entry.
    pub fn remove_expense(&mut self, amount: f64) -> RemoveOutcome {
        if self.total_expenses <= 0.0 && !self.expense_count.is_positive() {
            tracing::warn!("no expenses to remove");
            return RemoveOutcome::NothingToRemove;
        }
        self.total_expenses -= amount;
        self.decrement_expense_count();
        tracing::debug!(amount, total = self.total_expenses, "expense removed");
        RemoveOutcome::Removed
    }

    pub fn decrement_expense_count(&mut self) {
        if !self.expense_count.decrement() {
            tracing::warn!(count = %self.expense_count.raw(), "expense count is not numeric");
        }
    }

    pub fn decrement_deposit_count(&mut self) {
        if !self.deposit_count.decrement() {
            tracing::warn!(count = %self.deposit_count.raw(), "deposit count is not numeric");
        }
    }

    /// Stored value, returned as-is.
    pub fn get_expense_count(&self) -> &Value {
        self.expense_count.raw()
    }

    /// Stored value, returned as-is.
    pub fn get_deposit_count(&self) -> &Value {
        self.deposit_count.raw()
    }

    /// Overwrites the expense counter with an arbitrary value.
    pub fn set_expense_count_raw(&mut self, value: impl Into<Value>) {
        self.expense_count.set_raw(value);
    }

    /// Overwrites the deposit counter with an arbitrary value.
    pub fn set_deposit_count_raw(&mut self, value: impl Into<Value>) {
        self.deposit_count.set_raw(value);
    }

    pub fn current_balance(&self) -> f64 {
        self.total_income - self.total_expenses
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_income: self.total_income,
            total_expenses: self.total_expenses,
            balance: self.current_balance(),
            deposit_count: self.get_deposit_count().clone(),
            expense_count: self.get_expense_count().clone(),
        }
    }

    pub fn all_transactions(&self) -> TransactionHistory {
        TransactionHistory {
            entries: self.transaction_log.clone(),
            deposit_count: self.get_deposit_count().clone(),
            expense_count: self.get_expense_count().clone(),
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_ledger_is_empty() {
        let ledger = Ledger::new();
        assert_eq!(ledger.owner_name(), "");
        assert_eq!(ledger.total_income(), 0.0);
        assert_eq!(ledger.total_expenses(), 0.0);
        assert_eq!(ledger.get_deposit_count(), &json!(0));
        assert_eq!(ledger.get_expense_count(), &json!(0));
        assert!(ledger.transaction_log().is_empty());
    }

    #[test]
    fn negative_income_lowers_total() {
        let mut ledger = Ledger::new();
        ledger.record_income(100.0);
        ledger.record_income(-40.0);
        assert_eq!(ledger.total_income(), 60.0);
        assert_eq!(ledger.get_deposit_count(), &json!(2));
        assert_eq!(ledger.transaction_log(), &[100.0, -40.0]);
    }

    #[test]
    fn remove_keeps_log_entries() {
        let mut ledger = Ledger::new();
        ledger.record_expense(20.0);
        assert_eq!(ledger.remove_expense(20.0), RemoveOutcome::Removed);
        assert_eq!(ledger.transaction_log(), &[-20.0]);
        assert_eq!(ledger.total_expenses(), 0.0);
    }

    #[test]
    fn remove_overshoot_goes_negative() {
        let mut ledger = Ledger::new();
        ledger.record_expense(10.0);
        ledger.remove_expense(25.0);
        assert_eq!(ledger.total_expenses(), -15.0);
        assert_eq!(ledger.current_balance(), 15.0);
        assert_eq!(ledger.get_expense_count(), &json!(0));
    }

    #[test]
    fn remove_proceeds_when_only_count_is_positive() {
        let mut ledger = Ledger::new();
        ledger.record_expense(0.0);
        assert_eq!(ledger.remove_expense(5.0), RemoveOutcome::Removed);
        assert_eq!(ledger.total_expenses(), -5.0);
        assert_eq!(ledger.get_expense_count(), &json!(0));
    }

    #[test]
    fn remove_guard_ignores_non_numeric_count() {
        let mut ledger = Ledger::new();
        ledger.set_expense_count_raw("3");
        assert_eq!(ledger.remove_expense(5.0), RemoveOutcome::NothingToRemove);
        assert_eq!(ledger.get_expense_count(), &json!("3"));
    }

    #[test]
    fn deposit_decrement_floors_at_zero() {
        let mut ledger = Ledger::new();
        ledger.record_income(1.0);
        ledger.decrement_deposit_count();
        ledger.decrement_deposit_count();
        assert_eq!(ledger.get_deposit_count(), &json!(0));
    }

    #[test]
    fn summary_renders_currency_lines() {
        let mut ledger = Ledger::with_owner("Sam");
        ledger.record_income(5000.0);
        ledger.record_expense(1250.5);
        let text = ledger.summary().to_string();
        assert!(text.contains("Total Income: $5000.00"));
        assert!(text.contains("Total Expenses: $1250.50"));
        assert!(text.contains("Current Balance: $3749.50"));
    }

    #[test]
    fn empty_history_says_so() {
        let history = Ledger::new().all_transactions();
        assert!(history.is_empty());
        assert!(history.to_string().starts_with("No transactions recorded.\n"));
    }
}
