//! Minimal geometry types shared by the engine crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// Gap left between a moving box and the face it is clipped against.
pub const EPSILON: f32 = 1.0e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Linear blend from `self` (t = 0) to `to` (t = 1).
    #[inline]
    pub fn lerp(self, to: Vec3, t: f32) -> Vec3 {
        self + (to - self) * t
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// Axis-aligned box. `min` is expected to be component-wise `<= max`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Unit cube occupying grid cell `(x, y, z)`.
    #[inline]
    pub fn cube(x: i32, y: i32, z: i32) -> Self {
        let min = Vec3::new(x as f32, y as f32, z as f32);
        Self::new(min, Vec3::new(min.x + 1.0, min.y + 1.0, min.z + 1.0))
    }

    /// Box centred on `center` with the given half extents.
    #[inline]
    pub fn around(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Grows the box along the direction of `d` only (swept volume of a move by `d`).
    pub fn expand(&self, d: Vec3) -> Aabb {
        let mut out = *self;
        if d.x < 0.0 {
            out.min.x += d.x;
        } else {
            out.max.x += d.x;
        }
        if d.y < 0.0 {
            out.min.y += d.y;
        } else {
            out.max.y += d.y;
        }
        if d.z < 0.0 {
            out.min.z += d.z;
        } else {
            out.max.z += d.z;
        }
        out
    }

    /// Translates the box in place.
    #[inline]
    pub fn translate(&mut self, d: Vec3) {
        self.min += d;
        self.max += d;
    }

    /// Strict interior overlap; touching faces do not count.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        other.max.x > self.min.x
            && other.min.x < self.max.x
            && other.max.y > self.min.y
            && other.min.y < self.max.y
            && other.max.z > self.min.z
            && other.min.z < self.max.z
    }

    /// Limits `dx` so that `moving`, translated along X, stops short of `self`.
    pub fn clip_x_collide(&self, moving: &Aabb, mut dx: f32) -> f32 {
        if moving.max.y <= self.min.y || moving.min.y >= self.max.y {
            return dx;
        }
        if moving.max.z <= self.min.z || moving.min.z >= self.max.z {
            return dx;
        }
        if dx > 0.0 && moving.max.x <= self.min.x {
            let limit = self.min.x - moving.max.x - EPSILON;
            if limit < dx {
                dx = limit;
            }
        }
        if dx < 0.0 && moving.min.x >= self.max.x {
            let limit = self.max.x - moving.min.x + EPSILON;
            if limit > dx {
                dx = limit;
            }
        }
        dx
    }

    /// Limits `dy` so that `moving`, translated along Y, stops short of `self`.
    pub fn clip_y_collide(&self, moving: &Aabb, mut dy: f32) -> f32 {
        if moving.max.x <= self.min.x || moving.min.x >= self.max.x {
            return dy;
        }
        if moving.max.z <= self.min.z || moving.min.z >= self.max.z {
            return dy;
        }
        if dy > 0.0 && moving.max.y <= self.min.y {
            let limit = self.min.y - moving.max.y - EPSILON;
            if limit < dy {
                dy = limit;
            }
        }
        if dy < 0.0 && moving.min.y >= self.max.y {
            let limit = self.max.y - moving.min.y + EPSILON;
            if limit > dy {
                dy = limit;
            }
        }
        dy
    }

    /// Limits `dz` so that `moving`, translated along Z, stops short of `self`.
    pub fn clip_z_collide(&self, moving: &Aabb, mut dz: f32) -> f32 {
        if moving.max.x <= self.min.x || moving.min.x >= self.max.x {
            return dz;
        }
        if moving.max.y <= self.min.y || moving.min.y >= self.max.y {
            return dz;
        }
        if dz > 0.0 && moving.max.z <= self.min.z {
            let limit = self.min.z - moving.max.z - EPSILON;
            if limit < dz {
                dz = limit;
            }
        }
        if dz < 0.0 && moving.min.z >= self.max.z {
            let limit = self.max.z - moving.min.z + EPSILON;
            if limit > dz {
                dz = limit;
            }
        }
        dz
    }
}
