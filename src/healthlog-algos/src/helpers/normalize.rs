use healthlog_types::{SymptomInput, SymptomObservation};

/// Severity given to bare symptom names when the log carries none.
pub const DEFAULT_SEVERITY: i32 = 5;

/// Turns either symptom representation into rated observations. A missing or
/// zero overall severity falls back to [`DEFAULT_SEVERITY`].
pub fn normalize_symptoms(
    symptoms: &SymptomInput,
    overall_severity: Option<i32>,
) -> Vec<SymptomObservation> {
    match symptoms {
        SymptomInput::Observations(observations) => observations.clone(),
        SymptomInput::Names(names) => {
            let severity = overall_severity
                .filter(|s| *s != 0)
                .unwrap_or(DEFAULT_SEVERITY);
            names
                .iter()
                .map(|name| SymptomObservation::new(name.clone(), severity))
                .collect()
        }
    }
}

/// `shortness-of-breath` -> `shortness of breath`
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(v: f64) -> i64 {
    // `v + 0.5` would round up values just below a half.
    let floor = v.floor();
    let rounded = if v - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observations_pass_through() {
        let input = SymptomInput::Observations(vec![SymptomObservation::new("fever", 9)]);
        let normalized = normalize_symptoms(&input, Some(2));
        assert_eq!(normalized, vec![SymptomObservation::new("fever", 9)]);
    }

    #[test]
    fn names_take_overall_severity() {
        let input = SymptomInput::Names(vec!["cough".into(), "nausea".into()]);
        let normalized = normalize_symptoms(&input, Some(7));
        assert_eq!(
            normalized,
            vec![
                SymptomObservation::new("cough", 7),
                SymptomObservation::new("nausea", 7)
            ]
        );
    }

    #[test]
    fn names_default_severity() {
        let input = SymptomInput::Names(vec!["cough".into()]);
        assert_eq!(normalize_symptoms(&input, None)[0].severity, 5);
        assert_eq!(normalize_symptoms(&input, Some(0))[0].severity, 5);
    }

    #[test]
    fn empty_input() {
        assert!(normalize_symptoms(&SymptomInput::Names(vec![]), Some(3)).is_empty());
        assert!(normalize_symptoms(&SymptomInput::default(), None).is_empty());
    }

    #[test]
    fn display_name_replaces_every_dash() {
        assert_eq!(display_name("shortness-of-breath"), "shortness of breath");
        assert_eq!(display_name("fever"), "fever");
    }

    #[test]
    fn round_half_up_basic() {
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(61.5), 62);
    }
}
