use healthlog_types::{
    ActivityLevel, AnalysisResult, HealthSnapshot, ImpactBreakdown, SymptomObservation, Urgency,
};

use crate::{
    WeightTables,
    helpers::normalize::{display_name, normalize_symptoms, round_half_up},
    summary::generate_summary,
};

const CHEST_PAIN_SYMPTOMS: [&str; 2] = ["chest-tightness", "chest-pain"];
const BREATHING_SYMPTOM: &str = "shortness-of-breath";

const GENERAL_PHYSICIAN: &str = "General Physician";

/// Scores a health snapshot with a fixed set of weighted rules.
///
/// Evaluation order, which is also the order of the reasoning lines:
/// 1. symptoms (weight x severity / 10, plus a bonus for three or more)
/// 2. sleep score bands
/// 3. past diagnoses (plus a bonus for two or more)
/// 4. lifestyle: smoking, alcohol, activity level
/// 5. age band
/// 6. allergies
/// 7. urgency and specialist, first matching rule wins
///
/// The raw total is unbounded until it is rounded and clamped to 0..=100.
pub struct HealthAnalyzer<'a> {
    weights: &'a WeightTables,
}

#[derive(Default)]
struct RiskAccumulator {
    total: f64,
    symptom: f64,
    sleep: f64,
    lifestyle: f64,
    medical_history: f64,
    reasoning: Vec<String>,
}

impl RiskAccumulator {
    fn note(&mut self, line: impl Into<String>) {
        self.reasoning.push(line.into());
    }

    fn add_symptom(&mut self, points: f64) {
        self.total += points;
        self.symptom += points;
    }

    fn add_sleep(&mut self, points: f64) {
        self.total += points;
        self.sleep += points;
    }

    fn add_lifestyle(&mut self, points: f64) {
        self.total += points;
        self.lifestyle += points;
    }

    fn add_medical_history(&mut self, points: f64) {
        self.total += points;
        self.medical_history += points;
    }

    fn risk_score(&self) -> u8 {
        round_half_up(self.total).clamp(0, 100) as u8
    }

    fn breakdown(&self) -> ImpactBreakdown {
        ImpactBreakdown {
            symptom_impact: round_half_up(self.symptom),
            sleep_impact: round_half_up(self.sleep),
            lifestyle_impact: round_half_up(self.lifestyle),
            medical_history_impact: round_half_up(self.medical_history),
        }
    }
}

/// Outcome of the urgency rules.
struct Triage {
    urgency: Urgency,
    specialist: &'static str,
    line: &'static str,
}

/// Analyzes with the process-wide weight tables.
pub fn analyze_health(snapshot: &HealthSnapshot) -> AnalysisResult {
    HealthAnalyzer::new(WeightTables::global()).analyze(snapshot)
}

impl<'a> HealthAnalyzer<'a> {
    pub const MULTI_SYMPTOM_COUNT: usize = 3;
    pub const MULTI_SYMPTOM_BONUS: f64 = 10.0;
    pub const MULTI_DIAGNOSIS_COUNT: usize = 2;
    pub const MULTI_DIAGNOSIS_BONUS: f64 = 8.0;
    pub const HIGH_SEVERITY: i32 = 8;
    pub const MODERATE_SEVERITY: i32 = 6;
    pub const ALLERGY_POINTS: f64 = 2.0;

    pub fn new(weights: &'a WeightTables) -> Self {
        Self { weights }
    }

    /// Never fails: unknown names fall back to default weights and missing
    /// fields count as absent.
    pub fn analyze(&self, snapshot: &HealthSnapshot) -> AnalysisResult {
        let observations = normalize_symptoms(&snapshot.symptoms, snapshot.overall_severity);
        let mut acc = RiskAccumulator::default();

        self.score_symptoms(&mut acc, &observations);
        Self::score_sleep(&mut acc, snapshot.sleep_score);
        self.score_medical_history(&mut acc, &snapshot.past_diagnoses);
        Self::score_lifestyle(&mut acc, snapshot);
        Self::score_age(&mut acc, snapshot.age);
        Self::score_allergies(&mut acc, &snapshot.allergies);

        let risk_score = acc.risk_score();
        let triage = Self::triage(risk_score, snapshot, &observations);
        acc.note(triage.line);

        log::debug!(
            "risk score {risk_score} (raw {:.2}), urgency {}, {} reasoning lines",
            acc.total,
            triage.urgency,
            acc.reasoning.len()
        );

        AnalysisResult {
            risk_score,
            urgency: triage.urgency,
            recommended_specialist: triage.specialist.to_string(),
            summary: generate_summary(risk_score, triage.urgency, snapshot, &observations),
            impact_breakdown: acc.breakdown(),
            reasoning: acc.reasoning,
        }
    }

    fn score_symptoms(&self, acc: &mut RiskAccumulator, observations: &[SymptomObservation]) {
        if observations.is_empty() {
            acc.note("No active symptoms reported today");
            return;
        }

        for symptom in observations {
            let weight = self.weights.symptom_weight(&symptom.name);
            acc.add_symptom(weight * (f64::from(symptom.severity) / 10.0));

            let name = display_name(&symptom.name);
            if symptom.severity >= Self::HIGH_SEVERITY {
                acc.note(format!(
                    "High severity {name} ({}/10) detected - requires immediate attention",
                    symptom.severity
                ));
            } else if symptom.severity >= Self::MODERATE_SEVERITY {
                acc.note(format!("Moderate {name} ({}/10) reported", symptom.severity));
            }
        }

        let count = observations.len();
        if count >= Self::MULTI_SYMPTOM_COUNT {
            acc.add_symptom(Self::MULTI_SYMPTOM_BONUS);
            acc.note(format!(
                "Multiple symptoms ({count}) detected - indicates potential systemic issue"
            ));
        } else {
            acc.note(format!("{count} active symptom(s) analyzed"));
        }
    }

    fn score_sleep(acc: &mut RiskAccumulator, sleep_score: f64) {
        if sleep_score < 40.0 {
            acc.add_sleep(25.0);
            acc.note(format!(
                "Critical sleep deficiency (Score: {sleep_score}/100) - severely impacting immune system and cognitive function"
            ));
        } else if sleep_score < 60.0 {
            acc.add_sleep(15.0);
            acc.note(format!(
                "Poor sleep quality (Score: {sleep_score}/100) - increasing stress and inflammation markers"
            ));
        } else if sleep_score < 75.0 {
            acc.add_sleep(8.0);
            acc.note(format!(
                "Suboptimal sleep (Score: {sleep_score}/100) - room for improvement"
            ));
        } else {
            acc.note(format!(
                "Good sleep quality (Score: {sleep_score}/100) - supporting overall health"
            ));
        }
    }

    fn score_medical_history(&self, acc: &mut RiskAccumulator, diagnoses: &[String]) {
        for diagnosis in diagnoses {
            let risk = self.weights.diagnosis_weight(diagnosis);
            acc.add_medical_history(risk);
            acc.note(format!(
                "Pre-existing condition: {diagnosis} (+{risk} risk points)"
            ));
        }

        if diagnoses.len() >= Self::MULTI_DIAGNOSIS_COUNT {
            acc.add_medical_history(Self::MULTI_DIAGNOSIS_BONUS);
            acc.note("Multiple chronic conditions require coordinated care management");
        }
    }

    fn score_lifestyle(acc: &mut RiskAccumulator, snapshot: &HealthSnapshot) {
        if snapshot.smoking.unwrap_or(false) {
            acc.add_lifestyle(15.0);
            acc.note("Smoking significantly increases cardiovascular and respiratory risks");
        }

        if snapshot.alcohol.unwrap_or(false) {
            acc.add_lifestyle(8.0);
            acc.note("Regular alcohol consumption affects liver and metabolic health");
        }

        match snapshot.activity_level {
            Some(ActivityLevel::Sedentary) => {
                acc.add_lifestyle(12.0);
                acc.note(
                    "Sedentary lifestyle increases risk of metabolic syndrome and cardiovascular issues",
                );
            }
            Some(ActivityLevel::Active) => {
                // Credited to the total only; the lifestyle subtotal stays non-negative.
                acc.total -= 5.0;
                acc.note("Active lifestyle is supporting cardiovascular health");
            }
            _ => {}
        }
    }

    fn score_age(acc: &mut RiskAccumulator, age: Option<u32>) {
        let Some(age) = age else {
            return;
        };

        if age > 65 {
            acc.add_medical_history(18.0);
            acc.note("Age-related health considerations require regular monitoring");
        } else if age > 50 {
            acc.add_medical_history(12.0);
            acc.note("Middle-age risk factors applied for preventive care");
        } else if age > 35 {
            acc.add_medical_history(5.0);
            acc.note("Age-appropriate health screening recommended");
        }
    }

    fn score_allergies(acc: &mut RiskAccumulator, allergies: &[String]) {
        let count = allergies.len();
        if count == 0 {
            return;
        }

        acc.add_medical_history(Self::ALLERGY_POINTS * count as f64);
        acc.note(format!(
            "{count} known allergy/allergies documented for medication safety"
        ));
    }

    fn triage(
        risk_score: u8,
        snapshot: &HealthSnapshot,
        observations: &[SymptomObservation],
    ) -> Triage {
        let has_chest_pain = observations
            .iter()
            .any(|s| CHEST_PAIN_SYMPTOMS.contains(&s.name.as_str()));
        let has_breathing_issue = observations.iter().any(|s| s.name == BREATHING_SYMPTOM);
        let has_severe_symptom = observations
            .iter()
            .any(|s| s.severity >= Self::HIGH_SEVERITY);

        if has_chest_pain && has_severe_symptom {
            Triage {
                urgency: Urgency::Emergency,
                specialist: "Cardiologist / Emergency Room",
                line: "EMERGENCY: Chest pain with high severity - seek immediate medical attention",
            }
        } else if risk_score >= 75 || has_severe_symptom {
            let specialist = if has_chest_pain {
                "Cardiologist"
            } else if has_breathing_issue {
                "Pulmonologist"
            } else {
                "Emergency Medicine Specialist"
            };
            Triage {
                urgency: Urgency::Emergency,
                specialist,
                line: "HIGH RISK: Immediate medical consultation strongly recommended",
            }
        } else if risk_score >= 50 {
            let specialist = if snapshot.has_diagnosis("Asthma") || has_breathing_issue {
                "Pulmonologist"
            } else if snapshot.has_diagnosis("Heart Disease") {
                "Cardiologist"
            } else if snapshot.has_diagnosis("Type 2 Diabetes") {
                "Endocrinologist"
            } else if observations.len() >= 2 {
                "General Physician (Internal Medicine)"
            } else {
                GENERAL_PHYSICIAN
            };
            Triage {
                urgency: Urgency::Monitor,
                specialist,
                line: "MONITOR: Schedule medical checkup within 48-72 hours",
            }
        } else if risk_score >= 30 {
            Triage {
                urgency: Urgency::Monitor,
                specialist: GENERAL_PHYSICIAN,
                line: "ROUTINE: Monitor symptoms and schedule regular checkup",
            }
        } else {
            Triage {
                urgency: Urgency::Normal,
                specialist: GENERAL_PHYSICIAN,
                line: "STABLE: Continue healthy habits and preventive care",
            }
        }
    }
}
