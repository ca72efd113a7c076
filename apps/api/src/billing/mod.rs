#![allow(dead_code)]

//! Billing adapter — the three-signal seam the core reads.
//!
//! The platform payment integration (Digital Goods API / PaymentRequest) is
//! browser-proprietary and lives outside this service; the core only consumes
//! `is_available`, `purchase`, and `has_entitlement`. Backends are swapped at
//! startup via config, carried as `Arc<dyn BillingProvider>`.

pub mod handlers;

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::gate::UsageGate;

/// Subscription products, as registered with the store listing.
pub const PRODUCT_IDS: [&str; 2] = ["hookybio_pro_monthly", "hookybio_pro_yearly"];

/// An active entitlement older than this is re-validated against the
/// provider before gating.
const REVALIDATE_AFTER_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum PurchaseError {
    /// User backed out of the payment sheet — not a hard failure.
    #[error("Purchase cancelled")]
    Cancelled,

    #[error("Billing not available")]
    Unavailable,

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Purchase failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct PurchaseReceipt {
    pub product_id: String,
    pub purchase_token: Uuid,
}

#[async_trait]
pub trait BillingProvider: Send + Sync {
    fn is_available(&self) -> bool;

    /// Runs the platform purchase flow for a product id.
    async fn purchase(&self, product_id: &str) -> Result<PurchaseReceipt, PurchaseError>;

    /// Whether the profile currently holds any PRO entitlement. Backs both
    /// restore-purchases and periodic re-validation.
    async fn has_entitlement(&self) -> Result<bool, PurchaseError>;
}

/// Default backend when no platform billing is reachable. Every signal is
/// negative; the paywall stays, existing entitlements are left untouched.
pub struct UnavailableBilling;

#[async_trait]
impl BillingProvider for UnavailableBilling {
    fn is_available(&self) -> bool {
        false
    }

    async fn purchase(&self, _product_id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        Err(PurchaseError::Unavailable)
    }

    async fn has_entitlement(&self) -> Result<bool, PurchaseError> {
        Ok(false)
    }
}

/// Dev-override backend (BILLING_DEV_GRANT=true): grants any known product
/// in-process so the PRO paths can be exercised without a store build.
#[derive(Default)]
pub struct DevBilling {
    granted: Mutex<bool>,
}

#[async_trait]
impl BillingProvider for DevBilling {
    fn is_available(&self) -> bool {
        true
    }

    async fn purchase(&self, product_id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        if !PRODUCT_IDS.contains(&product_id) {
            return Err(PurchaseError::UnknownProduct(product_id.to_string()));
        }

        *self.granted.lock().expect("billing lock poisoned") = true;
        info!("Dev billing: granted {product_id}");

        Ok(PurchaseReceipt {
            product_id: product_id.to_string(),
            purchase_token: Uuid::new_v4(),
        })
    }

    async fn has_entitlement(&self) -> Result<bool, PurchaseError> {
        Ok(*self.granted.lock().expect("billing lock poisoned"))
    }
}

/// Re-validates a stale entitlement against the billing provider.
///
/// The flag is only revoked on an explicit negative verdict; an unavailable
/// or erroring provider never silently reverts it.
pub async fn ensure_fresh_entitlement(gate: &UsageGate, billing: &dyn BillingProvider) {
    let Some(entitlement) = gate.entitlement() else {
        return;
    };
    if !entitlement.active {
        return;
    }
    if Utc::now() - entitlement.verified_at < Duration::days(REVALIDATE_AFTER_DAYS) {
        return;
    }

    if !billing.is_available() {
        warn!("Entitlement is stale but billing is unavailable — keeping it");
        return;
    }

    match billing.has_entitlement().await {
        Ok(true) => {
            if let Err(e) = gate.touch_verified() {
                warn!("Failed to record entitlement verification: {e}");
            }
        }
        Ok(false) => {
            if let Err(e) = gate.revoke_pro() {
                warn!("Failed to revoke lapsed entitlement: {e}");
            }
        }
        Err(e) => {
            warn!("Entitlement re-validation failed: {e} — keeping the flag");
        }
    }
}
