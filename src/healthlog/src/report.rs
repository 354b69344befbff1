use std::fmt::Display;

use healthlog_types::AnalysisResult;

/// Plain-text rendering of an analysis for the terminal.
pub struct Report<'a>(pub &'a AnalysisResult);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = self.0;
        let impact = &result.impact_breakdown;

        f.write_fmt(format_args!(
            "Risk score: {}/100 ({})\nUrgency: {}\nRecommended: {}\n",
            result.risk_score,
            result.risk_band(),
            result.urgency,
            result.recommended_specialist,
        ))?;
        f.write_fmt(format_args!(
            "Impact:\n\tSymptoms: {}\n\tSleep: {}\n\tLifestyle: {}\n\tMedical history: {}\n",
            impact.symptom_impact,
            impact.sleep_impact,
            impact.lifestyle_impact,
            impact.medical_history_impact,
        ))?;

        f.write_str("Reasoning:\n")?;
        for line in &result.reasoning {
            f.write_fmt(format_args!("\t- {}\n", line))?;
        }

        f.write_fmt(format_args!("\n{}", result.summary))
    }
}

#[cfg(test)]
mod tests {
    use healthlog_types::{ImpactBreakdown, Urgency};

    use super::*;

    #[test]
    fn renders_all_sections() {
        let result = AnalysisResult {
            risk_score: 53,
            urgency: Urgency::Monitor,
            recommended_specialist: "Pulmonologist".into(),
            reasoning: vec!["first".into(), "second".into()],
            summary: "Summary text.".into(),
            impact_breakdown: ImpactBreakdown {
                symptom_impact: 13,
                sleep_impact: 25,
                lifestyle_impact: 15,
                medical_history_impact: 0,
            },
        };

        let text = Report(&result).to_string();
        assert!(text.starts_with("Risk score: 53/100 (moderate)\nUrgency: monitor\n"));
        assert!(text.contains("Recommended: Pulmonologist\n"));
        assert!(text.contains("\tSleep: 25\n"));
        assert!(text.contains("Reasoning:\n\t- first\n\t- second\n"));
        assert!(text.ends_with("\nSummary text."));
    }
}
