pub(crate) mod weights;
pub use weights::{WeightTables, WeightsError};

pub(crate) mod sleep;
pub use sleep::{DEFAULT_SLEEP_SCORE, SleepScoreCalculator};

pub(crate) mod risk;
pub use risk::{HealthAnalyzer, analyze_health};

pub(crate) mod summary;
pub use summary::generate_summary;

pub(crate) mod access_key;
pub use access_key::AccessKeyGenerator;

pub mod helpers;
