use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) tree_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) bodies_indexed: u32,
    pub(super) bodies_outside: u32,
    pub(super) tree_nodes: u32,
    pub(super) tree_depth: u32,
    pub(super) candidate_pairs: u32,
    pub(super) contacts: u32,
    pub(super) collisions_resolved: u32,
    pub(super) boundary_hits: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn tree_ms(&self) -> f64 { self.tree_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_indexed(&self) -> u32 { self.bodies_indexed }
    #[wasm_bindgen(getter)]
    pub fn bodies_outside(&self) -> u32 { self.bodies_outside }
    #[wasm_bindgen(getter)]
    pub fn tree_nodes(&self) -> u32 { self.tree_nodes }
    #[wasm_bindgen(getter)]
    pub fn tree_depth(&self) -> u32 { self.tree_depth }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn boundary_hits(&self) -> u32 { self.boundary_hits }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
