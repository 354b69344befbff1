use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How long a freshly issued grant stays redeemable.
pub const GRANT_TTL_HOURS: i64 = 24;

/// Shareable key handed to a clinician plus an opaque hash stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKey {
    /// `XXXX-XXXX-XXXX-XXXX` over `[A-Z0-9]`.
    pub display_key: String,
    /// 64 lowercase hex characters.
    pub opaque_hash: String,
}

/// Optional context the patient attaches when sharing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantDetails {
    pub doctor_name: Option<String>,
    pub hospital_name: Option<String>,
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrantStatus {
    Active,
    Used,
    Expired,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("no access key given")]
    EmptyKey,
    #[error("access key is invalid or does not exist")]
    InvalidKey,
    #[error("access key expired at {0}")]
    Expired(DateTime<Utc>),
    #[error("access key was already used at {0}")]
    AlreadyUsed(DateTime<Utc>),
}

/// A single-use, time-limited grant to view a patient's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub id: Uuid,
    pub patient_id: Uuid,
    #[serde(flatten)]
    pub key: AccessKey,
    #[serde(flatten)]
    pub details: GrantDetails,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
}

impl AccessGrant {
    pub fn issue(patient_id: Uuid, key: AccessKey, details: GrantDetails, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            key,
            details,
            created_at: now,
            expires_at: now + TimeDelta::hours(GRANT_TTL_HOURS),
            used_at: None,
        }
    }

    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    pub fn status(&self, now: DateTime<Utc>) -> GrantStatus {
        if self.is_used() {
            GrantStatus::Used
        } else if self.is_expired(now) {
            GrantStatus::Expired
        } else {
            GrantStatus::Active
        }
    }

    /// Keys are typed by hand, so surrounding whitespace and case are ignored.
    pub fn matches(&self, presented: &str) -> bool {
        presented.trim().to_uppercase() == self.key.display_key
    }

    /// Consumes the grant. Expiry is checked before prior use.
    pub fn redeem(&mut self, presented: &str, now: DateTime<Utc>) -> Result<(), AccessError> {
        if presented.trim().is_empty() {
            return Err(AccessError::EmptyKey);
        }
        if !self.matches(presented) {
            return Err(AccessError::InvalidKey);
        }
        if self.is_expired(now) {
            return Err(AccessError::Expired(self.expires_at));
        }
        if let Some(used_at) = self.used_at {
            return Err(AccessError::AlreadyUsed(used_at));
        }

        self.used_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn grant() -> AccessGrant {
        let key = AccessKey {
            display_key: "AB12-CD34-EF56-GH78".into(),
            opaque_hash: "0".repeat(64),
        };
        AccessGrant::issue(Uuid::new_v4(), key, GrantDetails::default(), now())
    }

    #[test]
    fn issued_grant_expires_after_a_day() {
        let grant = grant();
        assert_eq!(grant.expires_at - grant.created_at, TimeDelta::hours(24));
        assert_eq!(grant.status(now()), GrantStatus::Active);
        assert_eq!(grant.status(now() + TimeDelta::hours(24)), GrantStatus::Active);
        assert_eq!(
            grant.status(now() + TimeDelta::hours(24) + TimeDelta::seconds(1)),
            GrantStatus::Expired
        );
    }

    #[test]
    fn redeem_normalizes_presented_key() {
        let mut grant = grant();
        grant.redeem("  ab12-cd34-ef56-gh78 ", now()).unwrap();
        assert_eq!(grant.used_at, Some(now()));
        assert_eq!(grant.status(now()), GrantStatus::Used);
    }

    #[test]
    fn redeem_is_single_use() {
        let mut grant = grant();
        let later = now() + TimeDelta::minutes(5);
        grant.redeem("AB12-CD34-EF56-GH78", now()).unwrap();
        assert_eq!(
            grant.redeem("AB12-CD34-EF56-GH78", later),
            Err(AccessError::AlreadyUsed(now()))
        );
    }

    #[test]
    fn redeem_rejects_bad_input() {
        let mut grant = grant();
        assert_eq!(grant.redeem("   ", now()), Err(AccessError::EmptyKey));
        assert_eq!(
            grant.redeem("ZZZZ-CD34-EF56-GH78", now()),
            Err(AccessError::InvalidKey)
        );
        assert!(!grant.is_used());
    }

    #[test]
    fn expiry_wins_over_prior_use() {
        let mut grant = grant();
        grant.redeem("AB12-CD34-EF56-GH78", now()).unwrap();
        let late = now() + TimeDelta::days(2);
        assert_eq!(
            grant.redeem("AB12-CD34-EF56-GH78", late),
            Err(AccessError::Expired(grant.expires_at))
        );
    }

    #[test]
    fn grant_serializes_flat() {
        let grant = grant();
        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value["display_key"], "AB12-CD34-EF56-GH78");
        assert!(value["doctor_name"].is_null());
        let back: AccessGrant = serde_json::from_value(value).unwrap();
        assert_eq!(back, grant);
    }
}
