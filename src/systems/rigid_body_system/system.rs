use std::collections::VecDeque;

use crate::core::error::PhysicsError;
use crate::rigid_body::{Body, Point, Shape, Vec2};

/// Stable handle to a body in a [`BodyArena`].
///
/// Handles are plain ids, so the engine and any renderer can hold copies.
/// `BodyHandle::INVALID` (id 0) never names a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u32);

impl BodyHandle {
    pub const INVALID: BodyHandle = BodyHandle(0);

    pub fn id(&self) -> u32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Rebuild a handle from an id handed out earlier (e.g. across the wasm
    /// boundary)
    pub fn from_id(id: u32) -> Self {
        Self(id)
    }
}

/// Owns every body of a simulation, addressed by [`BodyHandle`].
///
/// Ids are never reused: destroying a body leaves an empty slot, so a stale
/// handle can't alias a newer body.
///
/// Slots cover the ids from the oldest live body to the newest one issued.
/// Dead slots at the front are dropped as soon as they appear and `clear`
/// drops them all; a dead slot behind a live one costs one pointer until
/// everything older is gone.
pub struct BodyArena {
    slots: VecDeque<Option<Box<Body>>>,
    /// Id of `slots[0]`
    first_id: u32,
    live: usize,
}

impl Default for BodyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyArena {
    pub fn new() -> Self {
        Self {
            slots: VecDeque::new(),
            first_id: 1,
            live: 0,
        }
    }

    #[inline]
    fn slot(&self, handle: BodyHandle) -> Option<usize> {
        handle.0.checked_sub(self.first_id).map(|i| i as usize)
    }

    fn next_id(&self) -> u64 {
        self.first_id as u64 + self.slots.len() as u64
    }

    /// Store a new body.
    pub fn create(
        &mut self,
        shape: Shape,
        position: Point,
        velocity: Vec2,
        mass: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidArgument(format!(
                "body position must be finite, got {:?}",
                position
            )));
        }
        if !velocity.is_finite() {
            return Err(PhysicsError::InvalidArgument(format!(
                "body velocity must be finite, got {:?}",
                velocity
            )));
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidArgument(format!(
                "body mass must be finite and non-negative, got {}",
                mass
            )));
        }
        let id = self.next_id();
        if id > u32::MAX as u64 {
            return Err(PhysicsError::InvalidArgument(
                "body id space exhausted".to_string(),
            ));
        }

        self.slots.push_back(Some(Box::new(Body::new(shape, position, velocity, mass))));
        self.live += 1;
        Ok(BodyHandle(id as u32))
    }

    /// Remove a body for good. Returns it if the handle was live.
    pub fn destroy(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slot(handle)?;
        let body = self.slots.get_mut(slot)?.take()?;
        self.live -= 1;

        while let Some(None) = self.slots.front() {
            self.slots.pop_front();
            self.first_id += 1;
        }
        Some(*body)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots.get(self.slot(handle)?)?.as_deref()
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.slot(handle)?;
        self.slots.get_mut(slot)?.as_deref_mut()
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slots currently held, live or dead
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Remove all bodies. Handles issued so far stay dead.
    pub fn clear(&mut self) {
        // `create` keeps every id within u32.
        self.first_id = self.first_id.saturating_add(self.slots.len() as u32);
        self.slots.clear();
        self.live = 0;
    }
}
