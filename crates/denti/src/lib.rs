//! Core library for the dental insurance diagnosis funnel: questionnaire
//! domain types, the deterministic scoring engine, and the lead intake
//! service with its storage abstraction.

pub mod config;
pub mod error;
pub mod funnel;
pub mod telemetry;
