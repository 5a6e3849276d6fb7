//! The core [`InferenceClient`] trait for schema-constrained inference calls.
//!
//! The trait is the seam between the gateway's decision logic and the
//! transport: one method in, raw text out. Tests substitute deterministic
//! stub implementations; production uses
//! [`OpenAiCompatClient`](crate::openai_compat::OpenAiCompatClient).

use async_trait::async_trait;

use crate::error::Result;
use crate::schema::ResponseSchema;

/// A client that can submit a prompt and return the raw constrained output.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Returns the client/endpoint name (e.g. "gemini", "openai").
    fn name(&self) -> &str;

    /// Submit a prompt constrained to `schema` and return the raw response
    /// text. The text is expected to be a JSON array conforming to the
    /// schema, but callers must tolerate empty and malformed output.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`](crate::error::ClientError) on transport,
    /// authentication, or response-framing failures.
    async fn submit(&self, prompt: &str, schema: &ResponseSchema) -> Result<String>;
}
