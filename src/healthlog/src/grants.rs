use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use healthlog_algos::AccessKeyGenerator;
use healthlog_types::{AccessGrant, GrantDetails};
use uuid::Uuid;

/// Generates a fresh key and wraps it in a grant valid for 24 hours.
pub fn issue_grant(patient_id: Uuid, details: GrantDetails, now: DateTime<Utc>) -> AccessGrant {
    let key = AccessKeyGenerator::generate();
    let grant = AccessGrant::issue(patient_id, key, details, now);
    info!(
        "issued access grant {} for patient {}, expires {}",
        grant.id, patient_id, grant.expires_at
    );
    grant
}

pub fn load_grant(path: &Path) -> anyhow::Result<AccessGrant> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read grant {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid grant in {}", path.display()))
}

pub fn save_grant(path: &Path, grant: &AccessGrant) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(grant)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// Redeems the grant stored at `path` and persists the consumed state.
/// The file is left untouched when redemption fails.
pub fn redeem_grant_file(
    path: &Path,
    presented: &str,
    now: DateTime<Utc>,
) -> anyhow::Result<AccessGrant> {
    let mut grant = load_grant(path)?;
    if let Err(error) = grant.redeem(presented, now) {
        warn!("rejected access key for grant {}: {}", grant.id, error);
        return Err(error.into());
    }

    save_grant(path, &grant)?;
    info!("grant {} redeemed", grant.id);
    Ok(grant)
}
