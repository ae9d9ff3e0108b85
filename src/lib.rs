#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod driver;
pub mod ease;
pub mod error;
pub mod lerp;
pub mod path;
pub mod transition;

pub use config::TransitionConfig;
pub use core::{Point, Vec2, Vec3};
pub use driver::{Driver, Tracer};
pub use ease::Ease;
pub use error::{SegueError, SegueResult};
pub use lerp::Lerp;
pub use path::Path;
pub use transition::{Strategy, Transition};
