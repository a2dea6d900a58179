pub mod cache;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod digest;
pub mod log;
pub mod schedule;

pub use cache::{CacheState, CacheStats, DayDetail, ReportCache};
pub use clock::{Clock, FixedClock, SystemClock};
pub use schedule::{ScheduleConfig, WorkSchedule};
