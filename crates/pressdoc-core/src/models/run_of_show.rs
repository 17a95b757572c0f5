use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry in a run of show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct Speaker {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub speaking_time: String,
    #[serde(default)]
    #[ts(optional)]
    pub notes: Option<String>,
}

impl Speaker {
    /// Notes worth printing. Blank notes are treated as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}

/// An ordered schedule of speakers for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct RunOfShow {
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
    /// Display order is list order.
    pub speakers: Vec<Speaker>,
}
