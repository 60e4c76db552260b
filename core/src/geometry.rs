//! Plain screen/world geometry shared by the tracker and the presenter

use std::ops::Sub;

/// Screen-space point or size (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn div_scalar(self, s: f32) -> Self {
        Self::new(self.x / s, self.y / s)
    }

    pub fn add_scalar(self, s: f32) -> Self {
        Self::new(self.x + s, self.y + s)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// World-space position (game units, Z up)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Copy of this position raised by `dz` on the Z axis
    pub fn raised(self, dz: f32) -> Self {
        Self::new(self.x, self.y, self.z + dz)
    }
}

/// Axis-aligned rectangle (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Rectangle of `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size.div_scalar(2.0), size)
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Copy moved up by `dy` pixels
    pub fn shifted_up(&self, dy: f32) -> Self {
        Self::new(Vec2::new(self.pos.x, self.pos.y - dy), self.size)
    }
}
