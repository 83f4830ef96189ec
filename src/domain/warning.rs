// Warning domain model
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One meteorological warning as published by the feed.
///
/// Only the fields used for filtering and aggregation are typed; everything
/// else (`text`, future additions) is kept in `extra` and serialized back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningRecord {
    #[serde(rename = "idAreaAviso", alias = "areaId", default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(rename = "awarenessTypeName")]
    pub awareness_type_name: String,
    #[serde(rename = "awarenessLevelID")]
    pub awareness_level_id: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WarningRecord {
    pub fn new(awareness_type_name: &str, awareness_level_id: &str, start_time: &str) -> Self {
        Self {
            area_id: None,
            awareness_type_name: awareness_type_name.to_string(),
            awareness_level_id: awareness_level_id.to_string(),
            start_time: start_time.to_string(),
            end_time: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_area(mut self, area_id: &str) -> Self {
        self.area_id = Some(area_id.to_string());
        self
    }
}

/// Parse a feed timestamp for axis ordering.
///
/// The feed publishes local times like `2024-01-15T06:00:00`; seconds and a
/// UTC offset are both optional. Offsets are dropped, keeping the wall clock.
pub fn parse_feed_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_deserialize_ipma_record() {
        let json = r#"{
            "text": "Vento forte",
            "awarenessTypeName": "Wind",
            "idAreaAviso": "LSB",
            "startTime": "2024-01-15T06:00:00",
            "awarenessLevelID": "yellow",
            "endTime": "2024-01-15T18:00:00"
        }"#;

        let record: WarningRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.area_id.as_deref(), Some("LSB"));
        assert_eq!(record.awareness_type_name, "Wind");
        assert_eq!(record.awareness_level_id, "yellow");
        assert_eq!(record.end_time.as_deref(), Some("2024-01-15T18:00:00"));
        assert_eq!(record.extra.get("text").and_then(|v| v.as_str()), Some("Vento forte"));
    }

    #[test]
    fn test_area_id_alias_and_optional_fields() {
        let json = r#"{"areaId":"PTO","awarenessTypeName":"Snow","awarenessLevelID":"red","startTime":"2024-01-01T00:00"}"#;
        let record: WarningRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.area_id.as_deref(), Some("PTO"));
        assert!(record.end_time.is_none());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{"awarenessTypeName":"Snow","startTime":"2024-01-01T00:00"}"#;
        assert!(serde_json::from_str::<WarningRecord>(json).is_err());
    }

    #[test]
    fn test_pass_through_fields_survive_serialization() {
        let json = r#"{"awarenessTypeName":"Fog","awarenessLevelID":"green","startTime":"2024-01-01T00:00","text":"Nevoeiro"}"#;
        let record: WarningRecord = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["text"], "Nevoeiro");
        assert_eq!(value["awarenessLevelID"], "green");
        assert!(value.get("idAreaAviso").is_none());
    }

    #[test]
    fn test_parse_feed_time_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(parse_feed_time("2024-01-01T06:00:00"), Some(expected));
        assert_eq!(parse_feed_time("2024-01-01T06:00"), Some(expected));
        assert_eq!(parse_feed_time("2024-01-01T06:00:00+01:00").map(|t| t.hour()), Some(6));
        assert_eq!(parse_feed_time("tomorrow"), None);
    }
}
