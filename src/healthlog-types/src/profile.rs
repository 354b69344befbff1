use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::SymptomInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Profile fields the risk analyzer cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub past_diagnoses: Vec<String>,
    #[serde(default)]
    pub smoking: Option<bool>,
    #[serde(default)]
    pub alcohol: Option<bool>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
}

/// One symptom log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthLog {
    pub logged_at: DateTime<Utc>,
    #[serde(default)]
    pub symptoms: SymptomInput,
    #[serde(default)]
    pub severity: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn activity_level_round_trips_through_strings() {
        assert_eq!(ActivityLevel::VeryActive.to_string(), "very-active");
        assert_eq!(
            ActivityLevel::from_str("sedentary").unwrap(),
            ActivityLevel::Sedentary
        );
        assert!(ActivityLevel::from_str("couch").is_err());
    }

    #[test]
    fn profile_defaults_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"age": 70}"#).unwrap();
        assert_eq!(profile.age, Some(70));
        assert!(profile.past_diagnoses.is_empty());
        assert_eq!(profile.smoking, None);
        assert_eq!(profile.activity_level, None);
    }
}
