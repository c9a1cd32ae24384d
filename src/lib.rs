//! Object factory for a 3D strategy game
//!
//! Builds in-game objects (buildings, robots, insects, plants, ruins...)
//! from a table of construction recipes. The factory composes model parts
//! into a transform tree, attaches collision volumes and shadows, adjusts
//! placement against the terrain and wires up the controllers that drive
//! the object afterwards.
//!
//! Rendering, terrain and particles are reached through the traits in
//! `engine`; the in-memory implementations there are enough to run the
//! factory headless.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod automation;
pub mod behavior;
pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod math;
pub mod object;
pub mod recipe;
pub mod storage;
pub mod viewer;

pub use config::FactoryConfig;
pub use error::FactoryError;
pub use factory::ObjectFactory;
pub use object::{CreateParams, Entity, ObjectId, ObjectType};
