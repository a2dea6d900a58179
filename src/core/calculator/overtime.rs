use crate::models::ledger::{MonthLedger, round2};
use crate::models::overtime::OvertimeTotals;
use chrono::Datelike;

pub struct OvertimeAggregator;

impl OvertimeAggregator {
    /// Sum the overtime of every row of every non-empty ledger, grouped by year.
    pub fn recompute<'a, I>(ledgers: I) -> OvertimeTotals
    where
        I: IntoIterator<Item = &'a MonthLedger>,
    {
        let mut totals = OvertimeTotals::default();

        for ledger in ledgers.into_iter().filter(|l| !l.is_empty()) {
            for row in &ledger.rows {
                *totals.by_year.entry(row.date.year()).or_insert(0.0) += row.overtime_minutes;
                totals.all_time += row.overtime_minutes;
            }
        }

        for value in totals.by_year.values_mut() {
            *value = round2(*value);
        }
        totals.all_time = round2(totals.all_time);
        totals
    }
}
