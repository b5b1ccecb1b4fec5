//! Dense voxel grid with per-column light depths and change notification.
#![forbid(unsafe_code)]

mod block;
mod edit;
mod face;
mod light;
mod listener;
mod raycast;
mod world;

pub use block::Block;
pub use edit::{Edit, HitResult};
pub use face::Face;
pub use light::Brightness;
pub use listener::{ListenerId, WorldChange, WorldListener};
pub use raycast::pick;
pub use world::{World, WorldError};
