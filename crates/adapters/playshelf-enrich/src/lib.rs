pub mod client;
pub mod config;

pub use client::{EnrichClient, Enricher, GeneratedMetadata};
pub use config::EnrichConfig;
