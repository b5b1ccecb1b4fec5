//! Swept-AABB collision and the first-person actor that rides on it.
#![forbid(unsafe_code)]

mod collide;
mod params;
mod player;

pub use collide::{CubeSource, Resolution, resolve_move};
pub use params::PhysicsParams;
pub use player::{MoveInput, Player, Pose};
