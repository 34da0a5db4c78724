//! Export encodings for audit records

use crate::error::{Result, RuntimeError};
use std::fmt;
use std::str::FromStr;
use warden_core::Decision;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    Json,
    /// One compact JSON object per line
    JsonLines,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonLines => "jsonl",
        }
    }

    /// MIME type for HTTP responses
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::JsonLines => "application/x-ndjson",
        }
    }

    /// Encode decisions in this format
    pub fn encode(&self, decisions: &[Decision]) -> Result<String> {
        match self {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(decisions)?),
            ExportFormat::JsonLines => {
                let mut out = String::new();
                for decision in decisions {
                    out.push_str(&serde_json::to_string(decision)?);
                    out.push('\n');
                }
                Ok(out)
            }
        }
    }

    /// Parse text previously produced by [`ExportFormat::encode`]
    pub fn parse_decisions(&self, text: &str) -> Result<Vec<Decision>> {
        match self {
            ExportFormat::Json => Ok(serde_json::from_str(text)?),
            ExportFormat::JsonLines => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| serde_json::from_str(line).map_err(RuntimeError::from))
                .collect(),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::JsonLines),
            _ => Err(RuntimeError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use warden_core::{
        AccessRequest, Actor, ActorAttributes, Department, Environment, Location, Resource,
        ResourceAttributes, ResourceStatus, ResourceType, Rule, Seniority,
    };

    fn decisions() -> Vec<Decision> {
        let actor = Actor::new(
            "user_1",
            "Alice",
            ActorAttributes::new(
                Department::Teller,
                Seniority::Mid,
                Location::new("downtown", "west", "US"),
                2,
            ),
        );
        let resource = Resource::new(
            "acct_1",
            ResourceAttributes {
                resource_type: ResourceType::Checking,
                owner: "user_9".to_string(),
                status: ResourceStatus::Active,
                sensitivity: 1,
                branch: "downtown".to_string(),
                region: "west".to_string(),
            },
        );
        let request = AccessRequest::new(actor, "deposit", resource, Environment::new(Utc::now(), true))
            .with_amount(200.0);
        let rule = Rule::permit("teller_small", "Teller Small Transaction", 100, |_| Ok(true));
        vec![
            Decision::matched(&rule, request.clone()),
            Decision::default_deny(request),
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("jsonl".parse::<ExportFormat>().unwrap(), ExportFormat::JsonLines);
        assert_eq!("ndjson".parse::<ExportFormat>().unwrap(), ExportFormat::JsonLines);

        let err = "csv".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, RuntimeError::UnsupportedFormat(ref f) if f == "csv"));
    }

    #[test]
    fn test_json_export_is_array() {
        let decisions = decisions();
        let text = ExportFormat::Json.encode(&decisions).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["outcome"], "permit");
        assert_eq!(array[0]["matched_rule_name"], "Teller Small Transaction");
        assert_eq!(array[1]["reason"], "No applicable rule found");

        assert_eq!(ExportFormat::Json.parse_decisions(&text).unwrap(), decisions);
    }

    #[test]
    fn test_jsonl_export_one_record_per_line() {
        let decisions = decisions();
        let text = ExportFormat::JsonLines.encode(&decisions).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
        assert_eq!(
            ExportFormat::JsonLines.parse_decisions(&text).unwrap(),
            decisions
        );
    }

    #[test]
    fn test_empty_export() {
        assert_eq!(ExportFormat::Json.encode(&[]).unwrap(), "[]");
        assert_eq!(ExportFormat::JsonLines.encode(&[]).unwrap(), "");
        assert!(ExportFormat::JsonLines.parse_decisions("").unwrap().is_empty());
    }
}
