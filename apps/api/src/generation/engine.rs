//! Generation engines — pluggable, trait-based content producers.
//!
//! The remote and local variants are alternatives, never composed: one is
//! picked at startup and carried in `AppState` as `Arc<dyn BioGenerator>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::models::BioRequest;
use crate::generation::prompts::{user_prompt, SYSTEM_PROMPT};
use crate::generation::templates;
use crate::llm_client::{LlmClient, LlmError};

/// A content producer for a validated request. Returns the raw content
/// string; segmentation is the caller's concern.
#[async_trait]
pub trait BioGenerator: Send + Sync {
    async fn generate(&self, request: &BioRequest) -> Result<String, AppError>;

    /// "remote" | "local" — for logging and the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Remote variant: fixed system instruction plus a user-role message built
/// from the six fields, forwarded to the hosted completion endpoint.
pub struct RemoteGenerator {
    llm: LlmClient,
}

impl RemoteGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl BioGenerator for RemoteGenerator {
    async fn generate(&self, request: &BioRequest) -> Result<String, AppError> {
        let prompt = user_prompt(request);

        match self.llm.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(content) => Ok(content),
            // Non-success upstream status keeps its code; the client only
            // ever sees the generic failure message.
            Err(LlmError::Api { status }) => Err(AppError::Upstream { status }),
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "completion call failed: {e}"
            ))),
        }
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

/// Local variant: deterministic/random template tables, no network and no
/// failure modes.
pub struct TemplateGenerator;

#[async_trait]
impl BioGenerator for TemplateGenerator {
    async fn generate(&self, request: &BioRequest) -> Result<String, AppError> {
        Ok(templates::generate(request))
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
