use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Start,
    Stop,
}

impl EventAction {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventAction::Start => "start",
            EventAction::Stop => "stop",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(EventAction::Start),
            "stop" => Some(EventAction::Stop),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EventAction::Start)
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, EventAction::Stop)
    }
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.to_db_str())
    }
}
