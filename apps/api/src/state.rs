use std::sync::Arc;

use crate::billing::BillingProvider;
use crate::gate::UsageGate;
use crate::generation::engine::BioGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation engine picked at startup — remote completion or local templates.
    pub generator: Arc<dyn BioGenerator>,
    /// Billing backend; default is the all-negative unavailable provider.
    pub billing: Arc<dyn BillingProvider>,
    /// Usage counter + entitlement flag over the persisted store.
    pub gate: UsageGate,
}
