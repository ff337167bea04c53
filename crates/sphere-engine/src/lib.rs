// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Orchestration around the external spectral-triple engine.
//!
//! The engine itself – eigendecomposition, Connes distances, conditioning –
//! lives behind a process boundary and is consumed through the
//! [`SpectralEngine`] trait as an opaque collaborator. This crate owns
//! everything that has to be right around it:
//!
//! * one deduplicated, lazily triggered module load whose outcome (ready or
//!   failed) every caller shares ([`EngineHandle`]),
//! * per-request last-request-wins supersession via generation tickets
//!   ([`SpectralGateway`]),
//! * fingerprint-based recomputation so structurally identical inputs never
//!   re-enter the engine ([`Fingerprint`]),
//! * the error taxonomy separating "engine unavailable" from "computation
//!   failed" ([`GatewayError`]), with boundary-validated result shapes.

pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod gateway;
pub mod loader;
pub mod result;

pub use engine::{EngineFault, SpectralEngine};
pub use error::{GatewayError, GatewayResult};
pub use fingerprint::Fingerprint;
pub use gateway::{flatten_row_major, ComputeOutcome, EngineHandle, SpectralGateway};
pub use loader::{
    validate_module_asset, EngineLoader, InstantiateFn, LoadError, ModuleAsset, ModuleFetcher,
    ModuleLoader,
};
pub use result::{ConditioningReport, ShapeViolation, SpectralTripleResult};
