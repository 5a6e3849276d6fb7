//! Inference client abstraction for repasse.
//!
//! This crate provides a unified interface for schema-constrained inference
//! calls against OpenAI-compatible chat-completion endpoints. It is a
//! standalone library with no dependency on the domain crates.
//!
//! # Architecture
//!
//! - [`InferenceClient`] trait defines the single transport seam:
//!   `submit(prompt, schema) -> raw text or fault`
//! - [`OpenAiCompatClient`] implements it for any OpenAI-compatible API
//! - [`ResponseSchema`] describes the constrained output provider-neutrally
//!   and re-validates the parsed response
//! - [`InferenceConfig`] describes how to reach an endpoint
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use repasse_llm::{FieldSpec, InferenceClient, InferenceConfig, OpenAiCompatClient, ResponseSchema};
//!
//! let client = OpenAiCompatClient::new(InferenceConfig::default(), api_key);
//! let schema = ResponseSchema::new(vec![
//!     FieldSpec::string("name"),
//!     FieldSpec::integer("count"),
//! ]);
//! let text = client.submit("List the items as JSON.", &schema).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod openai_compat;
pub mod schema;

pub use client::InferenceClient;
pub use config::InferenceConfig;
pub use error::{ClientError, Result};
pub use openai_compat::OpenAiCompatClient;
pub use schema::{FieldKind, FieldSpec, ResponseSchema};
