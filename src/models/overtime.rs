use serde::Serialize;
use std::collections::BTreeMap;

/// Overtime folded over every cached month ledger.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct OvertimeTotals {
    pub all_time: f64,
    pub by_year: BTreeMap<i32, f64>,
}

impl OvertimeTotals {
    pub fn for_year(&self, year: i32) -> f64 {
        self.by_year.get(&year).copied().unwrap_or(0.0)
    }
}
