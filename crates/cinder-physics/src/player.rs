use cinder_geom::{Aabb, Vec3};
use cinder_world::World;

use crate::collide::{CubeSource, resolve_move};
use crate::params::PhysicsParams;

/// Per-tick input state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reset: bool,
}

/// Interpolated camera state handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub eye: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// First-person actor with a fixed-size collision box.
///
/// `pos` is the eye point: right after `set_pos` it is the box center, after
/// a resolved move it sits `eye_height` above the bottom of the box.
#[derive(Debug)]
pub struct Player {
    pub pos: Vec3,
    pub prev_pos: Vec3,
    pub vel: Vec3,
    /// Degrees around +Y.
    pub yaw: f32,
    /// Degrees, positive looks down, clamped to [-90, 90].
    pub pitch: f32,
    pub bb: Aabb,
    pub on_ground: bool,
    params: PhysicsParams,
    spawn_extent: Vec3,
    rng: fastrand::Rng,
}

impl Player {
    /// Creates an actor dropped at a random spot above `world`.
    pub fn new(world: &World, params: PhysicsParams, rng: fastrand::Rng) -> Self {
        let mut p = Self {
            pos: Vec3::ZERO,
            prev_pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            bb: Aabb::default(),
            on_ground: false,
            params,
            spawn_extent: Vec3::new(
                world.width() as f32,
                world.depth() as f32,
                world.height() as f32,
            ),
            rng,
        };
        p.reset_pos();
        p.prev_pos = p.pos;
        p
    }

    #[inline]
    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn set_pos(&mut self, pos: Vec3) {
        self.pos = pos;
        let half = Vec3::new(
            self.params.half_width,
            self.params.half_height,
            self.params.half_width,
        );
        self.bb = Aabb::around(pos, half);
    }

    /// Respawns at a random x/z inside the world, above its top.
    pub fn reset_pos(&mut self) {
        let x = self.rng.f32() * self.spawn_extent.x;
        let z = self.rng.f32() * self.spawn_extent.z;
        let y = self.spawn_extent.y + self.params.spawn_clearance;
        self.set_pos(Vec3::new(x, y, z));
        log::debug!(target: "player", "respawn at ({:.2}, {:.2}, {:.2})", x, y, z);
    }

    /// Applies a mouse delta.
    pub fn turn(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.params.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.params.mouse_sensitivity).clamp(-90.0, 90.0);
    }

    /// Advances one fixed simulation step.
    pub fn tick<S: CubeSource + ?Sized>(&mut self, source: &S, input: &MoveInput) {
        self.prev_pos = self.pos;
        if input.reset {
            self.reset_pos();
        }

        let mut xa = 0.0;
        let mut za = 0.0;
        if input.forward {
            za -= 1.0;
        }
        if input.back {
            za += 1.0;
        }
        if input.left {
            xa -= 1.0;
        }
        if input.right {
            xa += 1.0;
        }
        if input.jump && self.on_ground {
            self.vel.y = self.params.jump_velocity;
        }

        let speed = if self.on_ground {
            self.params.ground_speed
        } else {
            self.params.air_speed
        };
        self.move_relative(xa, za, speed);
        self.vel.y -= self.params.gravity;
        self.move_by(source, self.vel);

        self.vel.x *= self.params.horizontal_drag;
        self.vel.y *= self.params.vertical_drag;
        self.vel.z *= self.params.horizontal_drag;
        if self.on_ground {
            self.vel.x *= self.params.ground_friction;
            self.vel.z *= self.params.ground_friction;
        }
    }

    /// Moves the box by `d` through the world, zeroing velocity on every axis
    /// that was clipped. A zero move leaves the actor untouched.
    pub fn move_by<S: CubeSource + ?Sized>(&mut self, source: &S, d: Vec3) {
        if d == Vec3::ZERO {
            return;
        }
        let r = resolve_move(source, &self.bb, d);
        self.bb.translate(r.delta);
        self.on_ground = r.on_ground;
        if r.blocked_x {
            self.vel.x = 0.0;
        }
        if r.blocked_y {
            self.vel.y = 0.0;
        }
        if r.blocked_z {
            self.vel.z = 0.0;
        }
        let c = self.bb.center();
        self.pos = Vec3::new(c.x, self.bb.min.y + self.params.eye_height, c.z);
    }

    /// Accelerates along the yaw-rotated input direction; inputs shorter
    /// than 0.1 are ignored.
    pub fn move_relative(&mut self, xa: f32, za: f32, speed: f32) {
        let dist = xa * xa + za * za;
        if dist < 0.01 {
            return;
        }
        let scale = speed / dist.sqrt();
        let (xa, za) = (xa * scale, za * scale);
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        self.vel.x += xa * cos - za * sin;
        self.vel.z += za * cos + xa * sin;
    }

    /// Eye pose blended between the last two ticks.
    pub fn pose(&self, alpha: f32) -> Pose {
        Pose {
            eye: self.prev_pos.lerp(self.pos, alpha),
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    /// Eye position and unit view direction.
    pub fn look_ray(&self) -> (Vec3, Vec3) {
        let (ys, yc) = self.yaw.to_radians().sin_cos();
        let (ps, pc) = self.pitch.to_radians().sin_cos();
        (self.pos, Vec3::new(ys * pc, -ps, -yc * pc))
    }
}
