use crate::domain::settings::WorldSettings;
use crate::rigid_body_system::BodyArena;
use crate::spatial::quadtree::QuadTree;

use super::perf_stats::PerfStats;
use super::Engine;

/// Build an engine from settings that were already validated.
pub(super) fn create_engine(settings: WorldSettings) -> Engine {
    log::debug!(
        "engine world ({}, {})-({}, {}), gravity {:?}",
        settings.bottom_left.x,
        settings.bottom_left.y,
        settings.top_right.x,
        settings.top_right.y,
        settings.gravity
    );

    Engine {
        bottom_left: settings.bottom_left,
        top_right: settings.top_right,
        gravity: settings.gravity,
        air_drag: settings.air_drag,
        ground_friction: settings.ground_friction,
        default_bounce: settings.bounce_factor,
        restitution: settings.restitution,
        arena: BodyArena::new(),
        bodies: Vec::new(),
        tree: QuadTree::new(settings.bottom_left, settings.top_right),
        candidates: Vec::with_capacity(32),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
