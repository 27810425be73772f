use wasm_bindgen::prelude::*;

use crate::domain::settings::WorldSettings;
use crate::rigid_body::{Point, Shape, Vec2};
use crate::rigid_body_system::BodyHandle;

use super::perf_stats::PerfStats;
use super::Engine;

/// JS-facing wrapper around [`Engine`]. Bodies are addressed by their `u32`
/// handle id; 0 means "no body".
#[wasm_bindgen]
pub struct World {
    core: Engine,
}

#[wasm_bindgen]
impl World {
    /// World spanning `(0, 0)` to `(width, height)`, default constants otherwise
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        let settings = WorldSettings {
            bottom_left: Point::origin(),
            top_right: Point::new(width, height),
            ..WorldSettings::default()
        };
        let core = Engine::with_settings(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        let (bl, tr) = self.core.bounds();
        tr.x - bl.x
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        let (bl, tr) = self.core.bounds();
        tr.y - bl.y
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.core.body_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn set_world_constants(
        &mut self,
        gravity_x: f32,
        gravity_y: f32,
        air_drag: f32,
        ground_friction: f32,
    ) -> Result<(), JsValue> {
        self.core
            .set_world_constants(Vec2::new(gravity_x, gravity_y), air_drag, ground_friction)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Load a world settings document. Bodies are kept.
    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        let settings = WorldSettings::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core
            .apply_settings(settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Create and register a circle. Returns the body id, or 0 on failure.
    pub fn create_circle(&mut self, x: f32, y: f32, vx: f32, vy: f32, mass: f32, radius: f32) -> u32 {
        if !radius.is_finite() || radius <= 0.0 {
            log::warn!("create_circle: invalid radius {}", radius);
            return BodyHandle::INVALID.id();
        }
        let handle = self.core.create_body_with_shape(
            Shape::circle(radius),
            Point::new(x, y),
            Vec2::new(vx, vy),
            mass,
        );
        if handle.is_valid() {
            self.core.add_body(handle);
        }
        handle.id()
    }

    /// Stop simulating a body without destroying it
    pub fn remove_body(&mut self, id: u32) -> u32 {
        self.core.remove_body(BodyHandle::from_id(id)) as u32
    }

    pub fn destroy_body(&mut self, id: u32) -> bool {
        self.core.destroy_body(BodyHandle::from_id(id)).is_ok()
    }

    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core
            .step(dt)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body(BodyHandle::from_id(id)).map(|b| b.position().x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body(BodyHandle::from_id(id)).map(|b| b.position().y)
    }

    /// Registered body positions as `[x0, y0, x1, y1, ...]`, in registration order
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.body_count() * 2);
        for &handle in self.core.body_handles() {
            if let Some(body) = self.core.body(handle) {
                let p = body.position();
                out.push(p.x);
                out.push(p.y);
            }
        }
        out
    }
}

impl World {
    /// Native access to the wrapped engine
    pub fn engine(&self) -> &Engine {
        &self.core
    }
}
