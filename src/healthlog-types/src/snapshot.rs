use serde::{Deserialize, Serialize};

use crate::ActivityLevel;

/// A single reported symptom. Severity is nominally 1-10 but is never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomObservation {
    pub name: String,
    pub severity: i32,
}

impl SymptomObservation {
    pub fn new(name: impl Into<String>, severity: i32) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }
}

/// Symptoms as logged: either rated individually or as bare names sharing
/// the log's overall severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SymptomInput {
    Observations(Vec<SymptomObservation>),
    Names(Vec<String>),
}

impl Default for SymptomInput {
    fn default() -> Self {
        Self::Observations(Vec::new())
    }
}

impl SymptomInput {
    pub fn len(&self) -> usize {
        match self {
            SymptomInput::Observations(observations) => observations.len(),
            SymptomInput::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<SymptomObservation>> for SymptomInput {
    fn from(observations: Vec<SymptomObservation>) -> Self {
        Self::Observations(observations)
    }
}

impl From<Vec<String>> for SymptomInput {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

/// Everything the risk analyzer looks at for one dashboard refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    #[serde(default)]
    pub symptoms: SymptomInput,
    /// Only consulted when `symptoms` holds bare names.
    #[serde(default)]
    pub overall_severity: Option<i32>,
    pub sleep_score: f64,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub past_diagnoses: Vec<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub smoking: Option<bool>,
    #[serde(default)]
    pub alcohol: Option<bool>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
}

impl HealthSnapshot {
    pub fn new(sleep_score: f64) -> Self {
        Self {
            sleep_score,
            ..Default::default()
        }
    }

    pub fn with_symptoms(mut self, symptoms: impl Into<SymptomInput>) -> Self {
        self.symptoms = symptoms.into();
        self
    }

    pub fn with_overall_severity(mut self, severity: i32) -> Self {
        self.overall_severity = Some(severity);
        self
    }

    pub fn with_diagnoses<I, S>(mut self, diagnoses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.past_diagnoses = diagnoses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_smoking(mut self, smoking: bool) -> Self {
        self.smoking = Some(smoking);
        self
    }

    pub fn with_alcohol(mut self, alcohol: bool) -> Self {
        self.alcohol = Some(alcohol);
        self
    }

    pub fn with_activity(mut self, activity: ActivityLevel) -> Self {
        self.activity_level = Some(activity);
        self
    }

    pub fn has_diagnosis(&self, diagnosis: &str) -> bool {
        self.past_diagnoses.iter().any(|d| d == diagnosis)
    }
}
