pub mod access;
pub use access::{AccessError, AccessGrant, AccessKey, GrantDetails, GrantStatus};

pub mod analysis;
pub use analysis::{AnalysisResult, ImpactBreakdown, RiskBand, Urgency};

pub mod profile;
pub use profile::{ActivityLevel, HealthLog, Profile};

pub mod sleep;
pub use sleep::{SleepEntry, SleepQuality};

pub mod snapshot;
pub use snapshot::{HealthSnapshot, SymptomInput, SymptomObservation};
