//! Rendering surface
//!
//! The game never talks to a graphics API. It describes each frame as a list
//! of shapes and text runs on a [`Canvas`]; a backend turns those into pixels.

pub mod instance;
pub mod shapes;

pub use instance::{InstanceBatch, ShapeInstance, TextRun};
pub use shapes::{Canvas, Pose, ShapeKind, draw_world};
