//! Usage gate — the freemium state machine wrapping generation.
//!
//! States are within-limit / limit-reached per UTC calendar day; an active
//! entitlement bypasses the gate entirely. The gate never alters the
//! generation contract: it only decides whether a request may proceed and
//! counts successes afterwards.
//!
//! Persisted under the original storage keys. Corrupted persisted JSON is
//! recovered silently as a fresh record for the current day.

pub mod handlers;
pub mod store;

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::models::BioRequest;
use store::KvStore;

/// Free generations per calendar day.
pub const FREE_DAILY_LIMIT: u32 = 3;

const USAGE_KEY: &str = "hooky_bio_usage";
const PRO_KEY: &str = "hooky_bio_pro";
const FIRST_USE_KEY: &str = "hooky_bio_first";

/// Per-day usage counter plus a lifetime total that survives resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub date: NaiveDate,
    pub count: u32,
    #[serde(rename = "totalBios")]
    pub total_bios: u64,
}

impl UsageRecord {
    fn fresh(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            total_bios: 0,
        }
    }
}

/// Persisted entitlement. `verified_at` backs the periodic re-validation
/// against the billing provider (see `billing::ensure_fresh_entitlement`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entitlement {
    pub active: bool,
    pub verified_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct UsageGate {
    store: Arc<dyn KvStore>,
}

impl UsageGate {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Current usage record. The first read on a new calendar day resets the
    /// count to 0 and preserves the lifetime total.
    pub fn usage(&self) -> UsageRecord {
        self.usage_on(Self::today())
    }

    fn usage_on(&self, today: NaiveDate) -> UsageRecord {
        let raw = match self.store.get(USAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UsageRecord::fresh(today),
            Err(e) => {
                warn!("Usage read failed: {e} — treating as fresh day");
                return UsageRecord::fresh(today);
            }
        };

        match serde_json::from_str::<UsageRecord>(&raw) {
            Ok(record) if record.date == today => record,
            Ok(record) => UsageRecord {
                date: today,
                count: 0,
                total_bios: record.total_bios,
            },
            Err(e) => {
                warn!("Corrupted usage record: {e} — treating as fresh day");
                UsageRecord::fresh(today)
            }
        }
    }

    pub fn remaining(&self) -> u32 {
        FREE_DAILY_LIMIT.saturating_sub(self.usage().count)
    }

    /// Counts one successful non-PRO generation.
    pub fn record_generation(&self) -> Result<UsageRecord> {
        self.record_generation_on(Self::today())
    }

    fn record_generation_on(&self, today: NaiveDate) -> Result<UsageRecord> {
        let mut record = self.usage_on(today);
        record.count += 1;
        record.total_bios += 1;
        self.store.set(USAGE_KEY, &serde_json::to_string(&record)?)?;
        Ok(record)
    }

    /// Stores the date of the first successful generation, once, for free
    /// and PRO profiles alike.
    pub fn mark_first_generation(&self) -> Result<()> {
        if self.first_generated_on()?.is_none() {
            self.store.set(FIRST_USE_KEY, &Self::today().to_string())?;
        }
        Ok(())
    }

    pub fn first_generated_on(&self) -> Result<Option<NaiveDate>> {
        Ok(self
            .store
            .get(FIRST_USE_KEY)?
            .and_then(|raw| raw.parse().ok()))
    }

    // ────────────────────────────────────────────────────────────────────
    // Entitlement flag
    // ────────────────────────────────────────────────────────────────────

    pub fn entitlement(&self) -> Option<Entitlement> {
        let raw = self.store.get(PRO_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(entitlement) => Some(entitlement),
            Err(e) => {
                warn!("Corrupted entitlement record: {e} — treating as free tier");
                None
            }
        }
    }

    pub fn is_pro(&self) -> bool {
        self.entitlement().map(|e| e.active).unwrap_or(false)
    }

    /// Activates the entitlement. Only a purchase, restore, or dev override
    /// reaches this.
    pub fn grant_pro(&self) -> Result<()> {
        self.set_entitlement(Entitlement {
            active: true,
            verified_at: Utc::now(),
        })
    }

    /// Refreshes `verified_at` after the billing provider confirmed the
    /// entitlement is still active.
    pub fn touch_verified(&self) -> Result<()> {
        self.grant_pro()
    }

    /// Deactivates the entitlement. Only an explicit negative verdict from
    /// the billing provider reaches this — never a generation code path.
    pub fn revoke_pro(&self) -> Result<()> {
        warn!("Entitlement revoked by billing provider verdict");
        self.set_entitlement(Entitlement {
            active: false,
            verified_at: Utc::now(),
        })
    }

    fn set_entitlement(&self, entitlement: Entitlement) -> Result<()> {
        self.store
            .set(PRO_KEY, &serde_json::to_string(&entitlement)?)
    }

    // ────────────────────────────────────────────────────────────────────
    // Gate decision
    // ────────────────────────────────────────────────────────────────────

    /// Decides whether a validated request may generate. PRO profiles pass
    /// unconditionally; free profiles are checked against the PRO feature
    /// table first, then the daily limit. Runs before any generation work.
    pub fn check_request(&self, request: &BioRequest) -> Result<(), AppError> {
        if self.is_pro() {
            return Ok(());
        }

        if request.output.requires_pro() {
            return Err(AppError::ProRequired(format!(
                "Output type '{}' is a PRO feature",
                request.output.as_str()
            )));
        }

        if request.style.requires_pro() {
            return Err(AppError::ProRequired(format!(
                "Style '{}' is a PRO feature",
                request.style.as_str()
            )));
        }

        if self.usage().count >= FREE_DAILY_LIMIT {
            return Err(AppError::LimitReached);
        }

        Ok(())
    }
}
