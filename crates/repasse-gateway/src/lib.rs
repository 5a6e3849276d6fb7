//! Non-throwing inference gateway for the repasse dashboard backend.
//!
//! The gateway mediates between the remote inference endpoint and
//! deterministic canned results. It exposes two operations:
//!
//! - [`InferenceGateway::audit`] -- detect data-quality issues in a list of
//!   student census records
//! - [`InferenceGateway::generate_intervention`] -- generate a three-question
//!   remedial quiz for a weak SAEB skill
//!
//! Both operations uphold the same contract: **they never return an error**.
//! Faults are absorbed at this boundary and communicated in-band (a synthetic
//! connection-failure issue, or an empty list), because the consuming
//! presentation layer renders whatever list it receives and has no separate
//! rejection path. Transport and schema faults are logged; credential-absent
//! and empty-result are normal control flow and are not.

pub mod config;
pub mod gateway;
pub mod prompt;
pub mod schemas;

pub use config::{GatewayConfig, credential_configured};
pub use gateway::InferenceGateway;
