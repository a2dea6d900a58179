use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Current layout version of the `schedule` section.
pub const SCHEDULE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub name: String,
    /// First year included when overtime totals are rebuilt.
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    #[serde(default)]
    pub schedule: ScheduleSection,
    /// Public holidays (free days when they fall on a workday).
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSection {
    #[serde(default = "default_schedule_version")]
    pub version: u32,
    /// Working weekdays, 0 = Monday ... 6 = Sunday.
    #[serde(default = "default_workdays")]
    pub workdays: Vec<u32>,
    #[serde(default)]
    pub target_minutes: WeekTargets,
}

/// Target work minutes per weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekTargets {
    #[serde(default = "default_day_target")]
    pub mon: f64,
    #[serde(default = "default_day_target")]
    pub tue: f64,
    #[serde(default = "default_day_target")]
    pub wed: f64,
    #[serde(default = "default_day_target")]
    pub thu: f64,
    #[serde(default = "default_day_target")]
    pub fri: f64,
    #[serde(default)]
    pub sat: f64,
    #[serde(default)]
    pub sun: f64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_first_year() -> i32 {
    2023
}
fn default_schedule_version() -> u32 {
    SCHEDULE_VERSION
}
fn default_workdays() -> Vec<u32> {
    vec![0, 1, 2, 3, 4]
}
fn default_day_target() -> f64 {
    480.0
}

impl Default for WeekTargets {
    fn default() -> Self {
        Self {
            mon: default_day_target(),
            tue: default_day_target(),
            wed: default_day_target(),
            thu: default_day_target(),
            fri: default_day_target(),
            sat: 0.0,
            sun: 0.0,
        }
    }
}

impl WeekTargets {
    /// Targets indexed by weekday (0 = Monday).
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.mon, self.tue, self.wed, self.thu, self.fri, self.sat, self.sun,
        ]
    }
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            version: default_schedule_version(),
            workdays: default_workdays(),
            target_minutes: WeekTargets::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            name: String::new(),
            first_year: default_first_year(),
            schedule: ScheduleSection::default(),
            holidays: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeledger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeledger.sqlite")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML; absent keys fall back to their per-field defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(day) = self.schedule.workdays.iter().find(|d| **d > 6) {
            return Err(AppError::Config(format!(
                "workday index {} out of range (0 = Monday .. 6 = Sunday)",
                day
            )));
        }
        if let Some((name, value)) = [
            ("mon", self.schedule.target_minutes.mon),
            ("tue", self.schedule.target_minutes.tue),
            ("wed", self.schedule.target_minutes.wed),
            ("thu", self.schedule.target_minutes.thu),
            ("fri", self.schedule.target_minutes.fri),
            ("sat", self.schedule.target_minutes.sat),
            ("sun", self.schedule.target_minutes.sun),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            return Err(AppError::Config(format!(
                "target minutes for '{}' must be a non-negative number, got {}",
                name, value
            )));
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("timeledger.sqlite"),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
