//! World settings - the configurable constants of a simulation.
//!
//! Settings can be loaded from a JSON document (`camelCase` keys, every field
//! optional) so hosts can tune a world without recompiling:
//!
//! ```json
//! {
//!   "bottomLeft": { "x": 0, "y": 0 },
//!   "topRight": { "x": 840, "y": 480 },
//!   "gravity": { "x": 0, "y": -9.81 },
//!   "airDrag": 0.1,
//!   "groundFriction": 0.3,
//!   "bounceFactor": 0.8,
//!   "restitution": "average"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::PhysicsError;
use crate::domain::constants::{
    AIR_DRAG_FACTOR, DEFAULT_BOUNCE_FACTOR, GRAVITY_VECTOR, GROUND_FRICTION, WORLD_BOTTOM_LEFT,
    WORLD_TOP_RIGHT,
};
use crate::rigid_body::{Point, Vec2};

/// How the restitution of a colliding pair is picked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestitutionRule {
    /// The world's bounce factor, whatever the bodies say
    World,
    /// Mean of both bodies' bounce factors
    #[default]
    Average,
    /// Smaller of both bounce factors
    Min,
    /// Larger of both bounce factors
    Max,
}

impl RestitutionRule {
    /// Combine two body bounce factors, falling back to `world` for
    /// [`RestitutionRule::World`].
    pub fn mix(&self, world: f32, a: f32, b: f32) -> f32 {
        match self {
            RestitutionRule::World => world,
            RestitutionRule::Average => (a + b) * 0.5,
            RestitutionRule::Min => a.min(b),
            RestitutionRule::Max => a.max(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSettings {
    pub bottom_left: Point,
    pub top_right: Point,
    pub gravity: Vec2,
    pub air_drag: f32,
    pub ground_friction: f32,
    /// Bounce factor given to newly created bodies
    pub bounce_factor: f32,
    pub restitution: RestitutionRule,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            bottom_left: WORLD_BOTTOM_LEFT,
            top_right: WORLD_TOP_RIGHT,
            gravity: GRAVITY_VECTOR,
            air_drag: AIR_DRAG_FACTOR,
            ground_friction: GROUND_FRICTION,
            bounce_factor: DEFAULT_BOUNCE_FACTOR,
            restitution: RestitutionRule::default(),
        }
    }
}

impl WorldSettings {
    /// Parse a settings document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let doc: SettingsDoc =
            serde_json::from_str(json).map_err(|e| PhysicsError::Config(e.to_string()))?;
        let settings = Self::from_doc(doc);
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        let doc = SettingsDoc {
            bottom_left: Some(self.bottom_left.into()),
            top_right: Some(self.top_right.into()),
            gravity: Some(self.gravity.into()),
            air_drag: Some(self.air_drag),
            ground_friction: Some(self.ground_friction),
            bounce_factor: Some(self.bounce_factor),
            restitution: Some(self.restitution),
        };
        serde_json::to_string(&doc).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        validate_margins(self.bottom_left, self.top_right)?;
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidArgument(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        validate_coefficient("air_drag", self.air_drag)?;
        validate_coefficient("ground_friction", self.ground_friction)?;
        validate_coefficient("bounce_factor", self.bounce_factor)?;
        if self.bounce_factor > 1.0 {
            return Err(PhysicsError::InvalidConstant {
                name: "bounce_factor",
                value: self.bounce_factor,
            });
        }
        Ok(())
    }

    fn from_doc(doc: SettingsDoc) -> Self {
        let defaults = Self::default();
        Self {
            bottom_left: doc.bottom_left.map(Into::into).unwrap_or(defaults.bottom_left),
            top_right: doc.top_right.map(Into::into).unwrap_or(defaults.top_right),
            gravity: doc.gravity.map(Into::into).unwrap_or(defaults.gravity),
            air_drag: doc.air_drag.unwrap_or(defaults.air_drag),
            ground_friction: doc.ground_friction.unwrap_or(defaults.ground_friction),
            bounce_factor: doc.bounce_factor.unwrap_or(defaults.bounce_factor),
            restitution: doc.restitution.unwrap_or(defaults.restitution),
        }
    }
}

/// World rectangle must be finite and non-empty on both axes
pub fn validate_margins(bottom_left: Point, top_right: Point) -> Result<(), PhysicsError> {
    let ok = bottom_left.is_finite()
        && top_right.is_finite()
        && bottom_left.x < top_right.x
        && bottom_left.y < top_right.y;
    if ok {
        Ok(())
    } else {
        Err(PhysicsError::InvalidWorldBounds {
            left: bottom_left.x,
            bottom: bottom_left.y,
            right: top_right.x,
            top: top_right.y,
        })
    }
}

/// Non-negative, finite scalar
pub fn validate_coefficient(name: &'static str, value: f32) -> Result<(), PhysicsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidConstant { name, value })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bottom_left: Option<XyDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_right: Option<XyDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gravity: Option<XyDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    air_drag: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ground_friction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bounce_factor: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    restitution: Option<RestitutionRule>,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct XyDoc {
    x: f32,
    y: f32,
}

impl From<XyDoc> for Point {
    fn from(v: XyDoc) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<XyDoc> for Vec2 {
    fn from(v: XyDoc) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Point> for XyDoc {
    fn from(p: Point) -> Self {
        XyDoc { x: p.x, y: p.y }
    }
}

impl From<Vec2> for XyDoc {
    fn from(v: Vec2) -> Self {
        XyDoc { x: v.x, y: v.y }
    }
}
