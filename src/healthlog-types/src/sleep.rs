use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SleepQuality {
    Excellent,
    Good,
    Average,
    Poor,
}

impl SleepQuality {
    /// Points added on top of the duration band.
    pub fn bonus(self) -> u8 {
        match self {
            SleepQuality::Excellent => 30,
            SleepQuality::Good => 20,
            SleepQuality::Average => 10,
            SleepQuality::Poor => 0,
        }
    }
}

/// A night of sleep as logged. The score is computed once at logging time;
/// older entries may not carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub logged_date: NaiveDate,
    pub hours_slept: f64,
    pub quality: SleepQuality,
    #[serde(default)]
    pub score: Option<u8>,
}
