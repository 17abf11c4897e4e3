use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Counters from one ingestion run against a source.
///
/// Only `channel_id`, `platform`, `pulled` and `kept` are persisted to
/// `logs_runs`; `success` and `error` live for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub channel_id: String,
    pub platform: Platform,
    pub pulled: i32,
    pub kept: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunStats {
    pub fn new(channel_id: impl Into<String>, platform: Platform, pulled: i32, kept: i32) -> Self {
        Self {
            channel_id: channel_id.into(),
            platform,
            pulled,
            kept,
            success: None,
            error: None,
        }
    }

    /// A run that produced nothing because it errored out.
    pub fn failed(
        channel_id: impl Into<String>,
        platform: Platform,
        error: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            platform,
            pulled: 0,
            kept: 0,
            success: Some(false),
            error: Some(error.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// `kept <= pulled`. Not enforced by the schema.
    pub fn is_consistent(&self) -> bool {
        self.kept <= self.pulled
    }

    /// Items filtered out during the run.
    pub fn dropped(&self) -> i32 {
        self.pulled.saturating_sub(self.kept).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_outcome() {
        let stats = RunStats::new("/trending-narratives?timeFrame=day", Platform::Elfa, 20, 18);
        assert_eq!(stats.success, None);
        assert_eq!(stats.error, None);
        assert!(!stats.is_failure());
        assert_eq!(stats.dropped(), 2);
    }

    #[test]
    fn test_failed_zeroes_counters() {
        let stats = RunStats::failed("trending-narratives", Platform::Elfa, "HTTP 502");
        assert_eq!(stats.pulled, 0);
        assert_eq!(stats.kept, 0);
        assert!(stats.is_failure());
        assert_eq!(stats.error.as_deref(), Some("HTTP 502"));
    }

    #[test]
    fn test_kept_above_pulled_is_inconsistent() {
        let stats = RunStats::new("c", Platform::Telegram, 5, 7);
        assert!(!stats.is_consistent());
        assert_eq!(stats.dropped(), 0, "dropped never goes negative");
    }

    #[test]
    fn test_serialize_omits_unset_outcome() {
        let stats = RunStats::new("general", Platform::Discord, 3, 3);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["platform"], "discord");
        assert!(json.get("success").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_deserialize_without_outcome_fields() {
        let stats: RunStats = serde_json::from_str(
            r#"{"channel_id":"general","platform":"telegram","pulled":4,"kept":1}"#,
        )
        .unwrap();
        assert_eq!(stats, RunStats::new("general", Platform::Telegram, 4, 1));
    }
}
