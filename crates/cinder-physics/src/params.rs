use serde::{Deserialize, Serialize};

/// Tunables of the actor, expressed per simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub ground_speed: f32,
    pub air_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub horizontal_drag: f32,
    pub vertical_drag: f32,
    pub ground_friction: f32,
    pub half_width: f32,
    pub half_height: f32,
    /// Eye position above the bottom of the box.
    pub eye_height: f32,
    /// Degrees of turn per unit of mouse movement.
    pub mouse_sensitivity: f32,
    /// Height above the world top at which the actor respawns.
    pub spawn_clearance: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            ground_speed: 0.02,
            air_speed: 0.005,
            gravity: 0.005,
            jump_velocity: 0.12,
            horizontal_drag: 0.91,
            vertical_drag: 0.98,
            ground_friction: 0.8,
            half_width: 0.3,
            half_height: 0.9,
            eye_height: 1.62,
            mouse_sensitivity: 0.15,
            spawn_clearance: 10.0,
        }
    }
}
