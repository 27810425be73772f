//! Physic Engine - minimal 2D rigid-body simulation, native and WASM
//!
//! Architecture:
//! - core/        - errors, logging backend
//! - domain/      - world constants and settings
//! - spatial/     - quadtree broad phase
//! - systems/     - bodies, body storage, collision and world forces
//! - simulation/  - the `Engine` stepper and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used across the crate)
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine for a browser host: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::init_console_logger(log::LevelFilter::Info);

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"Physic WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::PhysicsError;
pub use domain::settings::{RestitutionRule, WorldSettings};
pub use rigid_body::{Angle, Body, Point, Shape, ShapeKind, Vec2};
pub use rigid_body_system::BodyHandle;
pub use simulation::{Engine, FixedStep, PerfStats, StepReport, World};
