//! Target schedule: minutes owed per weekday, working weekdays, holidays.

use crate::config::Config;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

/// Weekday index used throughout the engine: 0 = Monday ... 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub trait ScheduleConfig {
    /// Target work minutes for `weekday` (0 = Monday).
    fn target_minutes(&self, weekday: u32) -> f64;

    fn workdays(&self) -> BTreeSet<u32>;

    fn holidays(&self, year: i32) -> Vec<NaiveDate>;

    /// Bumped whenever the meaning of the schedule fields changes.
    fn version(&self) -> u32 {
        1
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        self.workdays().contains(&weekday_index(date))
    }
}

type HolidayProvider = Box<dyn Fn(i32) -> Vec<NaiveDate> + Send + Sync>;

/// Schedule built from the configuration file.
pub struct WorkSchedule {
    version: u32,
    targets: [f64; 7],
    workdays: BTreeSet<u32>,
    holidays: HolidayProvider,
}

impl WorkSchedule {
    pub fn new(targets: [f64; 7], workdays: impl IntoIterator<Item = u32>) -> Self {
        Self {
            version: 1,
            targets,
            workdays: workdays.into_iter().filter(|d| *d < 7).collect(),
            holidays: Box::new(|_| Vec::new()),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let listed = cfg.holidays.clone();
        Self::new(
            cfg.schedule.target_minutes.as_array(),
            cfg.schedule.workdays.iter().copied(),
        )
        .with_version(cfg.schedule.version)
        .with_holidays(move |year| {
            listed
                .iter()
                .copied()
                .filter(|d| d.year() == year)
                .collect()
        })
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Replace the holiday lookup (e.g. a country calendar).
    pub fn with_holidays<F>(mut self, provider: F) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate> + Send + Sync + 'static,
    {
        self.holidays = Box::new(provider);
        self
    }
}

impl ScheduleConfig for WorkSchedule {
    fn target_minutes(&self, weekday: u32) -> f64 {
        if !self.workdays.contains(&weekday) {
            return 0.0;
        }
        self.targets.get(weekday as usize).copied().unwrap_or(0.0)
    }

    fn workdays(&self) -> BTreeSet<u32> {
        self.workdays.clone()
    }

    fn holidays(&self, year: i32) -> Vec<NaiveDate> {
        (self.holidays)(year)
    }

    fn version(&self) -> u32 {
        self.version
    }
}

impl fmt::Debug for WorkSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkSchedule")
            .field("version", &self.version)
            .field("targets", &self.targets)
            .field("workdays", &self.workdays)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_workdays_have_no_target() {
        let s = WorkSchedule::new([480.0; 7], [0, 1, 2, 3, 4]);
        assert_eq!(s.target_minutes(0), 480.0);
        assert_eq!(s.target_minutes(5), 0.0);
        assert_eq!(s.target_minutes(6), 0.0);
    }

    #[test]
    fn config_holidays_are_filtered_by_year() {
        let mut cfg = Config::default();
        cfg.holidays = vec![
            NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
        ];
        let s = WorkSchedule::from_config(&cfg);
        assert_eq!(
            s.holidays(2025),
            vec![NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()]
        );
    }
}
