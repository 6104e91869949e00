use budget_tracker::{
    init,
    ledger::{Ledger, RemoveOutcome},
};
use serde_json::{json, Value};

#[test]
fn record_income_adds_amount_count_and_entry() {
    init();
    for amount in [0.0, 0.01, 42.5, 1_000_000.0] {
        let mut ledger = Ledger::new();
        ledger.record_income(10.0);
        let before = ledger.total_income();

        ledger.record_income(amount);

        assert_eq!(ledger.total_income(), before + amount);
        assert_eq!(ledger.get_deposit_count(), &json!(2));
        assert_eq!(ledger.transaction_log().last(), Some(&amount));
    }
}

#[test]
fn record_expense_appends_negated_amount() {
    for amount in [-25.0, 0.0, 99.99] {
        let mut ledger = Ledger::new();
        ledger.record_expense(amount);
        assert_eq!(ledger.total_expenses(), amount);
        assert_eq!(ledger.get_expense_count(), &json!(1));
        assert_eq!(ledger.transaction_log(), &[-amount]);
    }
}

#[test]
fn remove_on_fresh_ledger_changes_nothing() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.remove_expense(30.0), RemoveOutcome::NothingToRemove);
    assert_eq!(ledger.total_expenses(), 0.0);
    assert_eq!(ledger.get_expense_count(), &json!(0));
    assert!(ledger.transaction_log().is_empty());
}

#[test]
fn remove_after_single_expense() {
    let mut ledger = Ledger::new();
    ledger.record_expense(100.0);
    assert_eq!(ledger.remove_expense(30.0), RemoveOutcome::Removed);
    assert_eq!(ledger.total_expenses(), 70.0);
    assert_eq!(ledger.get_expense_count(), &json!(0));
    assert_eq!(ledger.transaction_log().len(), 1);
}

#[test]
fn decrements_never_go_below_zero() {
    let mut ledger = Ledger::new();
    ledger.record_income(1.0);
    ledger.record_expense(1.0);
    ledger.record_expense(1.0);
    for _ in 0..10 {
        ledger.decrement_deposit_count();
        ledger.decrement_expense_count();
    }
    assert_eq!(ledger.get_deposit_count(), &json!(0));
    assert_eq!(ledger.get_expense_count(), &json!(0));
}

#[test]
fn mixed_scenario_totals() {
    let mut ledger = Ledger::new();
    ledger.record_income(5000.0);
    ledger.record_expense(1000.0);
    ledger.record_expense(500.0);
    ledger.record_income(2000.0);
    ledger.record_expense(200.0);

    assert_eq!(ledger.total_income(), 7000.0);
    assert_eq!(ledger.total_expenses(), 1700.0);
    assert_eq!(ledger.get_deposit_count(), &json!(2));
    assert_eq!(ledger.get_expense_count(), &json!(3));
    assert_eq!(ledger.transaction_log().len(), 5);
    assert_eq!(ledger.current_balance(), 5300.0);

    let summary = ledger.summary();
    assert_eq!(summary.balance, 5300.0);
    assert_eq!(summary.deposit_count, json!(2));
}

#[test]
fn log_keeps_insertion_order_and_signs() {
    let mut ledger = Ledger::new();
    ledger.record_income(100.0);
    ledger.record_expense(50.0);
    ledger.record_income(75.0);
    assert_eq!(ledger.transaction_log(), &[100.0, -50.0, 75.0]);

    let history = ledger.all_transactions();
    assert_eq!(history.entries, vec![100.0, -50.0, 75.0]);
    assert_eq!(history.expense_count, json!(1));
    assert_eq!(history.summary, ledger.summary());
}

#[test]
fn balance_is_income_minus_expenses_with_negatives() {
    let mut ledger = Ledger::new();
    ledger.record_income(-20.0);
    ledger.record_expense(5.0);
    ledger.remove_expense(15.0);
    assert_eq!(ledger.total_expenses(), -10.0);
    assert_eq!(ledger.current_balance(), -10.0);
    assert_eq!(
        ledger.current_balance(),
        ledger.total_income() - ledger.total_expenses()
    );
}

#[test]
fn counters_pass_stored_values_through() {
    let cases: Vec<Value> = vec![
        json!(0),
        json!(1_000_000),
        json!(-1),
        Value::Null,
        json!("3"),
        json!(3.5),
        json!([]),
        json!({}),
    ];
    for value in cases {
        let mut ledger = Ledger::new();
        ledger.set_expense_count_raw(value.clone());
        ledger.set_deposit_count_raw(value.clone());
        assert_eq!(ledger.get_expense_count(), &value);
        assert_eq!(ledger.get_deposit_count(), &value);
        assert_eq!(ledger.summary().expense_count, value);
    }
}

#[test]
fn corrupted_counter_survives_mutations() {
    let mut ledger = Ledger::new();
    ledger.set_deposit_count_raw(Value::Null);
    ledger.record_income(10.0);
    assert_eq!(ledger.get_deposit_count(), &Value::Null);
    assert_eq!(ledger.total_income(), 10.0);
    assert_eq!(ledger.transaction_log(), &[10.0]);
}

#[test]
fn owner_name_is_settable() {
    let mut ledger = Ledger::new();
    assert_eq!(ledger.owner_name(), "");
    ledger.set_owner_name("Jo");
    assert_eq!(ledger.owner_name(), "Jo");
}

#[test]
fn summary_serializes_for_export() {
    let mut ledger = Ledger::with_owner("Jo");
    ledger.record_income(10.0);
    let json = serde_json::to_value(ledger.summary()).unwrap();
    assert_eq!(json["total_income"], json!(10.0));
    assert_eq!(json["deposit_count"], json!(1));
}
