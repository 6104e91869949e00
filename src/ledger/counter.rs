use serde_json::Value;

/// Loosely-typed storage slot for a ledger counter.
///
/// The ledger only ever writes integers here, but callers may overwrite a
/// slot with any JSON value. Reads hand the stored value back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter(Value);

impl Counter {
    pub fn zero() -> Self {
        Self(Value::from(0_i64))
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn set_raw(&mut self, value: impl Into<Value>) {
        self.0 = value.into();
    }

    /// True only for numeric slots holding a value above zero.
    pub fn is_positive(&self) -> bool {
        self.0.as_f64().is_some_and(|value| value > 0.0)
    }

    /// Adds one. Returns `false` when the slot does not hold a number.
    pub fn increment(&mut self) -> bool {
        if let Some(value) = self.0.as_i64() {
            self.0 = Value::from(value.saturating_add(1));
            true
        } else if let Some(value) = self.0.as_u64() {
            self.0 = Value::from(value.saturating_add(1));
            true
        } else if let Some(value) = self.0.as_f64() {
            self.0 = Value::from(value + 1.0);
            true
        } else {
            false
        }
    }

    /// Subtracts one without going below zero. Non-positive values are left
    /// as they are. Returns `false` when the slot does not hold a number.
    pub fn decrement(&mut self) -> bool {
        if let Some(value) = self.0.as_i64() {
            if value > 0 {
                self.0 = Value::from(value - 1);
            }
            true
        } else if let Some(value) = self.0.as_u64() {
            self.0 = Value::from(value.saturating_sub(1));
            true
        } else if let Some(value) = self.0.as_f64() {
            if value > 0.0 {
                self.0 = Value::from((value - 1.0).max(0.0));
            }
            true
        } else {
            false
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::zero()
    }
}
