use crate::core::error::PhysicsError;
use crate::domain::settings::{validate_coefficient, validate_margins, RestitutionRule, WorldSettings};
use crate::rigid_body::{Point, Vec2};

use super::perf_stats::PerfStats;
use super::Engine;

pub(super) fn enable_perf_metrics(engine: &mut Engine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn perf_stats(engine: &Engine) -> PerfStats {
    engine.perf_stats.clone()
}

pub(super) fn set_world_margins(engine: &mut Engine, bottom_left: Point, top_right: Point) -> Result<(), PhysicsError> {
    if let Err(e) = validate_margins(bottom_left, top_right) {
        log::warn!("rejected world margins: {}", e);
        return Err(e);
    }
    engine.bottom_left = bottom_left;
    engine.top_right = top_right;
    Ok(())
}

pub(super) fn set_world_constants(
    engine: &mut Engine,
    gravity: Vec2,
    air_drag: f32,
    ground_friction: f32,
) -> Result<(), PhysicsError> {
    let checked = if gravity.is_finite() {
        validate_coefficient("air_drag", air_drag)
            .and_then(|_| validate_coefficient("ground_friction", ground_friction))
    } else {
        Err(PhysicsError::InvalidArgument(format!(
            "gravity must be finite, got {:?}",
            gravity
        )))
    };
    if let Err(e) = checked {
        log::warn!("rejected world constants: {}", e);
        return Err(e);
    }

    engine.gravity = gravity;
    engine.air_drag = air_drag;
    engine.ground_friction = ground_friction;
    Ok(())
}

pub(super) fn set_restitution_rule(engine: &mut Engine, rule: RestitutionRule) {
    engine.restitution = rule;
}

pub(super) fn settings(engine: &Engine) -> WorldSettings {
    WorldSettings {
        bottom_left: engine.bottom_left,
        top_right: engine.top_right,
        gravity: engine.gravity,
        air_drag: engine.air_drag,
        ground_friction: engine.ground_friction,
        bounce_factor: engine.default_bounce,
        restitution: engine.restitution,
    }
}

pub(super) fn apply_settings(engine: &mut Engine, settings: WorldSettings) -> Result<(), PhysicsError> {
    if let Err(e) = settings.validate() {
        log::warn!("rejected world settings: {}", e);
        return Err(e);
    }
    engine.bottom_left = settings.bottom_left;
    engine.top_right = settings.top_right;
    engine.gravity = settings.gravity;
    engine.air_drag = settings.air_drag;
    engine.ground_friction = settings.ground_friction;
    engine.default_bounce = settings.bounce_factor;
    engine.restitution = settings.restitution;
    Ok(())
}
