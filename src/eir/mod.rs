//! EIR registry and synchronization pipeline.
//!
//! This module holds the custom UUID slot registry, the payload encoder
//! and the manager that keeps the controller's EIR buffer consistent
//! with registry state.

pub mod builder;
pub mod manager;
pub mod registry;
