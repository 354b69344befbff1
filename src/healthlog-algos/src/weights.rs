use std::collections::HashMap;
use std::sync::{LazyLock, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SYMPTOM_WEIGHTS: [(&str, f64); 13] = [
    ("chest-tightness", 30.0),
    ("chest-pain", 30.0),
    ("dizziness", 15.0),
    ("headache", 10.0),
    ("fatigue", 12.0),
    ("anxiety", 10.0),
    ("nausea", 10.0),
    ("fever", 15.0),
    ("cough", 8.0),
    ("shortness-of-breath", 20.0),
    ("rapid-heartbeat", 18.0),
    ("weakness", 10.0),
    ("confusion", 15.0),
];

const DIAGNOSIS_WEIGHTS: [(&str, f64); 9] = [
    ("Type 2 Diabetes", 15.0),
    ("Hypertension (High BP)", 20.0),
    ("Asthma", 12.0),
    ("Heart Disease", 25.0),
    ("Thyroid Disorder", 8.0),
    ("Anxiety Disorder", 10.0),
    ("Sleep Apnea", 12.0),
    ("COPD", 18.0),
    ("Depression", 8.0),
];

static DEFAULT_TABLES: LazyLock<WeightTables> = LazyLock::new(WeightTables::default);
static INSTALLED_TABLES: OnceLock<WeightTables> = OnceLock::new();

#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("invalid weight document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weight tables were already installed")]
    AlreadyInstalled,
}

/// Symptom and diagnosis weights used by the risk analyzer. Lookups are exact
/// and case-sensitive; anything unknown gets the matching default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTables {
    pub symptoms: HashMap<String, f64>,
    pub diagnoses: HashMap<String, f64>,
    pub default_symptom_weight: f64,
    pub default_diagnosis_weight: f64,
}

/// Partial document merged over the built-in tables.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WeightOverrides {
    symptoms: HashMap<String, f64>,
    diagnoses: HashMap<String, f64>,
    default_symptom_weight: Option<f64>,
    default_diagnosis_weight: Option<f64>,
}

impl Default for WeightTables {
    fn default() -> Self {
        Self {
            symptoms: to_map(&SYMPTOM_WEIGHTS),
            diagnoses: to_map(&DIAGNOSIS_WEIGHTS),
            default_symptom_weight: 8.0,
            default_diagnosis_weight: 5.0,
        }
    }
}

impl WeightTables {
    pub fn symptom_weight(&self, name: &str) -> f64 {
        self.symptoms
            .get(name)
            .copied()
            .unwrap_or(self.default_symptom_weight)
    }

    pub fn diagnosis_weight(&self, diagnosis: &str) -> f64 {
        self.diagnoses
            .get(diagnosis)
            .copied()
            .unwrap_or(self.default_diagnosis_weight)
    }

    /// Builds tables from an override document; omitted entries keep their
    /// built-in values.
    pub fn from_json(json: &str) -> Result<Self, WeightsError> {
        let overrides: WeightOverrides = serde_json::from_str(json)?;
        let mut tables = Self::default();

        tables.symptoms.extend(overrides.symptoms);
        tables.diagnoses.extend(overrides.diagnoses);
        if let Some(weight) = overrides.default_symptom_weight {
            tables.default_symptom_weight = weight;
        }
        if let Some(weight) = overrides.default_diagnosis_weight {
            tables.default_diagnosis_weight = weight;
        }

        Ok(tables)
    }

    /// Sets the process-wide tables. Only the first call succeeds.
    pub fn install(tables: WeightTables) -> Result<(), WeightsError> {
        INSTALLED_TABLES
            .set(tables)
            .map_err(|_| WeightsError::AlreadyInstalled)
    }

    /// The installed tables, or the built-in ones if nothing was installed.
    pub fn global() -> &'static WeightTables {
        INSTALLED_TABLES.get().unwrap_or(&*DEFAULT_TABLES)
    }
}

fn to_map(table: &[(&str, f64)]) -> HashMap<String, f64> {
    table
        .iter()
        .map(|(name, weight)| (name.to_string(), *weight))
        .collect()
}
