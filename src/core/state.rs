use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::mood::{Activity, Mood};

/// Everything ByteBuddy remembers between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionState {
    pub mood: Mood,
    #[serde(default)]
    pub last_activity: Option<Activity>,
    pub interaction_count: u64,
    #[serde(default, alias = "lastInteractionTime")]
    pub last_interaction: Option<DateTime<Utc>>,
}

impl Default for CompanionState {
    fn default() -> Self {
        CompanionState {
            mood: Mood::default(),
            last_activity: None,
            interaction_count: 0,
            last_interaction: None,
        }
    }
}

impl CompanionState {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Record one interaction happening at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.interaction_count = self.interaction_count.saturating_add(1);
        self.last_interaction = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_state() {
        let state = CompanionState::default();
        assert_eq!(state.mood, Mood::Curious);
        assert_eq!(state.last_activity, None);
        assert_eq!(state.interaction_count, 0);
        assert_eq!(state.last_interaction, None);
    }

    #[test]
    fn test_wire_shape() {
        let state = CompanionState::default();
        let json: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
        assert_eq!(json["mood"], "curious");
        assert!(json["lastActivity"].is_null());
        assert_eq!(json["interactionCount"], 0);
        assert!(json["lastInteraction"].is_null());
    }

    #[test]
    fn test_reads_browser_value() {
        let raw = r#"{"mood":"excited","lastActivity":"learn","interactionCount":7,"lastInteraction":"2024-05-01T09:30:00.000Z"}"#;
        let state = CompanionState::from_json(raw).unwrap();
        assert_eq!(state.mood, Mood::Excited);
        assert_eq!(state.last_activity, Some(Activity::Learn));
        assert_eq!(state.interaction_count, 7);
        assert_eq!(
            state.last_interaction,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_accepts_last_interaction_time_alias() {
        let raw = r#"{"mood":"happy","interactionCount":1,"lastInteractionTime":"2024-05-01T09:30:00Z"}"#;
        let state = CompanionState::from_json(raw).unwrap();
        assert!(state.last_interaction.is_some());
        assert_eq!(state.last_activity, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(CompanionState::from_json(r#"{"mood":"grumpy","interactionCount":0}"#).is_err());
        assert!(CompanionState::from_json(r#"{"mood":"happy","interactionCount":-3}"#).is_err());
        assert!(CompanionState::from_json(r#"{"mood":"happy","interactionCount":1.5}"#).is_err());
        assert!(CompanionState::from_json(r#"{"mood":"happy"}"#).is_err());
        assert!(CompanionState::from_json("not json").is_err());
    }

    #[test]
    fn test_touch() {
        let mut state = CompanionState::default();
        let now = Utc::now();
        state.touch(now);
        assert_eq!(state.interaction_count, 1);
        assert_eq!(state.last_interaction, Some(now));

        state.interaction_count = u64::MAX;
        state.touch(now);
        assert_eq!(state.interaction_count, u64::MAX);
    }

    #[test]
    fn test_round_trip() {
        let state = CompanionState {
            mood: Mood::Tired,
            last_activity: Some(Activity::Sleep),
            interaction_count: 42,
            last_interaction: Some(Utc::now()),
        };
        let restored = CompanionState::from_json(&state.to_json().unwrap()).unwrap();
        assert_eq!(restored, state);
    }
}
