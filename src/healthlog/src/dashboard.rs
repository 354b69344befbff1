use healthlog_algos::SleepScoreCalculator;
use healthlog_types::{HealthLog, HealthSnapshot, Profile, SleepEntry};
use serde::{Deserialize, Serialize};

/// What the dashboard has on hand when it asks for an analysis: the profile,
/// the newest symptom log and recent sleep entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardInput {
    pub profile: Profile,
    #[serde(default)]
    pub latest_log: Option<HealthLog>,
    #[serde(default)]
    pub sleep_entries: Vec<SleepEntry>,
}

impl DashboardInput {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        let (symptoms, overall_severity) = match &self.latest_log {
            Some(log) => (log.symptoms.clone(), log.severity),
            None => Default::default(),
        };

        let sleep_score = SleepScoreCalculator::rolling_average(&self.sleep_entries);
        trace!(
            "rolling sleep score {:.1} over the last {} of {} entries",
            sleep_score,
            self.sleep_entries.len().min(SleepScoreCalculator::ROLLING_WINDOW),
            self.sleep_entries.len()
        );

        HealthSnapshot {
            symptoms,
            overall_severity,
            sleep_score,
            allergies: self.profile.allergies.clone(),
            past_diagnoses: self.profile.past_diagnoses.clone(),
            age: self.profile.age,
            smoking: Some(self.profile.smoking.unwrap_or(false)),
            alcohol: Some(self.profile.alcohol.unwrap_or(false)),
            activity_level: self.profile.activity_level,
        }
    }
}
