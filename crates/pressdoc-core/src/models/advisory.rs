use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A short press notice announcing an upcoming event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(deny_unknown_fields)]
#[ts(export)]
pub struct MediaAdvisory {
    pub headline: String,
    pub summary: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    /// Names listed under "WHO:". `null`, absent and `[]` all mean none.
    #[serde(default)]
    #[ts(optional)]
    pub additional_speakers: Option<Vec<String>>,
}

impl MediaAdvisory {
    /// Speaker names in display order; empty when none were given.
    pub fn speakers(&self) -> &[String] {
        self.additional_speakers.as_deref().unwrap_or_default()
    }
}
