use chrono::NaiveDate;
use healthlog_types::{SleepEntry, SleepQuality};

/// Score assumed for a night with no stored (or a zero) score, and for an
/// empty history.
pub const DEFAULT_SLEEP_SCORE: f64 = 70.0;

pub struct SleepScoreCalculator;

impl SleepScoreCalculator {
    pub const MAX_SCORE: u8 = 100;
    /// Nights included in the rolling average.
    pub const ROLLING_WINDOW: usize = 7;

    /// Duration band plus quality bonus, capped at 100. Any duration is
    /// accepted; negative values land in the lowest band.
    pub fn calculate(hours_slept: f64, quality: SleepQuality) -> u8 {
        let base = Self::duration_band(hours_slept);
        base.saturating_add(quality.bonus()).min(Self::MAX_SCORE)
    }

    fn duration_band(hours: f64) -> u8 {
        if (7.0..=9.0).contains(&hours) {
            70
        } else if (6.0..7.0).contains(&hours) {
            55
        } else if (5.0..6.0).contains(&hours) {
            40
        } else if hours < 5.0 {
            25
        } else if hours > 9.0 && hours <= 10.0 {
            60
        } else {
            // Oversleeping shares the insufficient-sleep band.
            40
        }
    }

    /// Scores a night at logging time.
    pub fn log_entry(logged_date: NaiveDate, hours_slept: f64, quality: SleepQuality) -> SleepEntry {
        SleepEntry {
            logged_date,
            hours_slept,
            quality,
            score: Some(Self::calculate(hours_slept, quality)),
        }
    }

    /// Mean score over the [`Self::ROLLING_WINDOW`] most recent nights. Entries
    /// may come in any order.
    pub fn rolling_average(entries: &[SleepEntry]) -> f64 {
        let mut recent = entries.iter().collect::<Vec<_>>();
        recent.sort_by(|a, b| b.logged_date.cmp(&a.logged_date));
        recent.truncate(Self::ROLLING_WINDOW);

        if recent.is_empty() {
            return DEFAULT_SLEEP_SCORE;
        }

        let total = recent
            .iter()
            .map(|e| match e.score {
                Some(score) if score > 0 => f64::from(score),
                _ => DEFAULT_SLEEP_SCORE,
            })
            .sum::<f64>();
        total / recent.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn optimal_excellent_is_capped() {
        assert_eq!(SleepScoreCalculator::calculate(8.0, SleepQuality::Excellent), 100);
    }

    #[test]
    fn short_poor_night() {
        assert_eq!(SleepScoreCalculator::calculate(4.0, SleepQuality::Poor), 25);
    }

    #[test]
    fn duration_bands() {
        let score = |h| SleepScoreCalculator::calculate(h, SleepQuality::Poor);
        assert_eq!(score(7.0), 70);
        assert_eq!(score(9.0), 70);
        assert_eq!(score(6.0), 55);
        assert_eq!(score(6.99), 55);
        assert_eq!(score(5.0), 40);
        assert_eq!(score(5.5), 40);
        assert_eq!(score(4.99), 25);
        assert_eq!(score(9.5), 60);
        assert_eq!(score(10.0), 60);
        assert_eq!(score(10.01), 40);
        assert_eq!(score(14.0), 40);
    }

    #[test]
    fn quality_bonus_applies() {
        assert_eq!(SleepScoreCalculator::calculate(6.5, SleepQuality::Good), 75);
        assert_eq!(SleepScoreCalculator::calculate(9.5, SleepQuality::Average), 70);
        assert_eq!(SleepScoreCalculator::calculate(11.0, SleepQuality::Excellent), 70);
    }

    #[test]
    fn odd_durations_do_not_panic() {
        assert_eq!(SleepScoreCalculator::calculate(-3.0, SleepQuality::Good), 45);
        assert_eq!(SleepScoreCalculator::calculate(f64::NAN, SleepQuality::Poor), 40);
        assert_eq!(SleepScoreCalculator::calculate(f64::INFINITY, SleepQuality::Poor), 40);
    }

    #[test]
    fn score_stays_in_range() {
        let qualities = [
            SleepQuality::Excellent,
            SleepQuality::Good,
            SleepQuality::Average,
            SleepQuality::Poor,
        ];
        for tenths in -20..=160 {
            for quality in qualities {
                let score = SleepScoreCalculator::calculate(tenths as f64 / 10.0, quality);
                assert!(score <= 100, "{score} out of range");
            }
        }
    }

    #[test]
    fn log_entry_stores_score() {
        let entry = SleepScoreCalculator::log_entry(date(1), 7.5, SleepQuality::Good);
        assert_eq!(entry.score, Some(90));
        assert_eq!(entry.logged_date, date(1));
    }

    #[test]
    fn rolling_average_empty() {
        assert_eq!(SleepScoreCalculator::rolling_average(&[]), 70.0);
    }

    #[test]
    fn rolling_average_fills_missing_scores() {
        let mut unscored = SleepScoreCalculator::log_entry(date(2), 4.0, SleepQuality::Poor);
        unscored.score = None;
        let entries = vec![
            SleepScoreCalculator::log_entry(date(1), 8.0, SleepQuality::Excellent),
            unscored,
            SleepScoreCalculator::log_entry(date(3), 4.0, SleepQuality::Poor),
        ];
        // (100 + 70 + 25) / 3
        assert_eq!(SleepScoreCalculator::rolling_average(&entries), 65.0);
    }

    #[test]
    fn rolling_average_zero_score_counts_as_default() {
        let mut zero = SleepScoreCalculator::log_entry(date(1), 8.0, SleepQuality::Good);
        zero.score = Some(0);
        assert_eq!(SleepScoreCalculator::rolling_average(&[zero]), 70.0);
    }

    #[test]
    fn rolling_average_keeps_newest_week() {
        // Oldest first: days 1..=7 are poor nights, days 8..=14 excellent.
        let entries = (1..=14)
            .map(|day| {
                let quality = if day > 7 {
                    SleepQuality::Excellent
                } else {
                    SleepQuality::Poor
                };
                SleepScoreCalculator::log_entry(date(day), if day > 7 { 8.0 } else { 4.0 }, quality)
            })
            .collect::<Vec<_>>();
        assert_eq!(SleepScoreCalculator::rolling_average(&entries), 100.0);

        let mut reversed = entries.clone();
        reversed.reverse();
        assert_eq!(SleepScoreCalculator::rolling_average(&reversed), 100.0);
    }
}
