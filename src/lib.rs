//! Flyn Core - Entitlement & Usage Metering
//!
//! This crate implements the plan/entitlement resolver and the
//! usage-counter/threshold-alerting engine that gate and meter tenant
//! actions on the Flyn platform. It is a client-side advisory mirror:
//! all enforcement is local and synchronous, and state is persisted
//! only to a local key-value snapshot.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
