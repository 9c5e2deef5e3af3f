//! This crate contains the shared fullstack server functions and types.
use dioxus::prelude::*;

pub mod config;
pub mod types;

#[cfg(feature = "server")]
pub mod relay;

#[cfg(feature = "server")]
pub mod state;

mod leads;

#[cfg(all(test, feature = "server"))]
mod test_support;


#[cfg(all(test, feature = "server"))]
mod domain_tests;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use leads::request_demo;
pub use types::{CompanySize, LeadDraft};
