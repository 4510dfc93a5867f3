use glam::Vec2;

use crate::{Body, Config, Side};

/// Axis-aligned bounding box on the table plane (`y` holds the table's z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Strict overlap: boxes that only share a face do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Static table geometry: walls, goal volumes and paddle lines.
///
/// Built once per match from [`Config`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub half_depth: f32,
    pub wall_z: f32,
    pub goal_x: f32,
    pub goal_half_extents: Vec2,
    pub paddle_x: f32,
}

impl Table {
    pub fn from_config(config: &Config) -> Self {
        Self {
            half_depth: config.table_half_depth,
            wall_z: config.wall_z,
            goal_x: config.goal_x,
            goal_half_extents: Vec2::new(config.goal_width, config.goal_depth) * 0.5,
            paddle_x: config.paddle_x,
        }
    }

    pub fn wall_z_top(&self) -> f32 {
        self.wall_z
    }

    pub fn wall_z_bottom(&self) -> f32 {
        -self.wall_z
    }

    /// X position of a side's paddle line
    pub fn paddle_x(&self, side: Side) -> f32 {
        side.sign() * self.paddle_x
    }

    /// X position of a side's goal volume
    pub fn goal_x(&self, side: Side) -> f32 {
        side.sign() * self.goal_x
    }

    pub fn goal_body(&self, side: Side) -> Body {
        Body::new(Vec2::new(self.goal_x(side), 0.0), self.goal_half_extents)
    }

    /// Clamp a paddle's z so the whole paddle stays on the table
    pub fn clamp_paddle_z(&self, z: f32, paddle_half_depth: f32) -> f32 {
        let limit = (self.half_depth - paddle_half_depth).max(0.0);
        z.clamp(-limit, limit)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
