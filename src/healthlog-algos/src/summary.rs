use healthlog_types::{HealthSnapshot, RiskBand, SymptomObservation, Urgency};

/// Symptoms at or above this severity are called out as severe in the summary.
const SEVERE_SUMMARY_THRESHOLD: i32 = 7;

/// Short narrative for the patient: risk, symptoms, sleep, history, then what to do.
pub fn generate_summary(
    score: u8,
    urgency: Urgency,
    snapshot: &HealthSnapshot,
    observations: &[SymptomObservation],
) -> String {
    let band = RiskBand::from_score(score);
    let mut summary = format!("Your current health risk assessment is {score}/100 ({band} risk). ");

    if observations.is_empty() {
        summary.push_str("No active symptoms reported today. ");
    } else {
        let severe = observations
            .iter()
            .filter(|s| s.severity >= SEVERE_SUMMARY_THRESHOLD)
            .count();
        if severe > 0 {
            summary.push_str(&format!(
                "You have reported {severe} severe symptom(s) that require attention. "
            ));
        } else {
            summary.push_str(&format!(
                "You have logged {} symptom(s) with mild to moderate severity. ",
                observations.len()
            ));
        }
    }

    summary.push_str(if snapshot.sleep_score < 50.0 {
        "Your sleep quality is critically low and significantly impacting your health. "
    } else if snapshot.sleep_score < 70.0 {
        "Sleep quality needs improvement for optimal recovery. "
    } else {
        "Sleep patterns are supporting your health. "
    });

    let conditions = snapshot.past_diagnoses.len();
    if conditions > 0 {
        summary.push_str(&format!(
            "Your medical history ({conditions} condition(s)) requires ongoing monitoring. "
        ));
    }

    summary.push_str(match urgency {
        Urgency::Emergency => {
            "Based on current indicators, immediate medical consultation is strongly recommended. Do not delay seeking professional care."
        }
        Urgency::Monitor => {
            "Please monitor your symptoms closely and consult a healthcare provider within 2-3 days if symptoms persist or worsen."
        }
        Urgency::Normal => {
            "Continue maintaining healthy habits, daily health logging, and preventive care routines."
        }
    });

    summary
}
