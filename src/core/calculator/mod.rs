pub mod day;
pub mod month;
pub mod overtime;

pub use day::{DayAggregator, DayTotals};
pub use month::MonthReportBuilder;
pub use overtime::OvertimeAggregator;
