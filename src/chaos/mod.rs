//! Chaos engineering module for KubeDash
//!
//! Integrates with Chaos Mesh to inject faults into deployed workloads:
//! - Pod kill
//! - Network delay
//! - I/O faults
//! - CPU stress

pub mod client;
pub mod experiment;
pub mod types;

pub use client::ChaosClient;
pub use experiment::{ChaosExperiment, ExperimentSpec, PodSelector, CHAOS_MESH_API_VERSION};
pub use types::*;
