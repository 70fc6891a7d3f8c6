//! gridlife: a bounded Game of Life engine.
//!
//! A fixed-size grid of binary cells, a double-buffered generation
//! advance (swap, never recompute in place), and a chunked concurrent
//! scheduler that fills the back buffer across worker threads while
//! coalescing redundant recompute requests. Rendering, input handling,
//! and pacing belong to the consumer; the engine exposes only the
//! controller API and its generation-ready notification.

pub mod controller;
pub mod engine;
pub mod grid;
pub mod presets;
pub mod scheduler;

pub use controller::{EngineError, EngineParams, GridController};
pub use grid::{CellGrid, CellState};
pub use presets::{PresetPattern, SeedKind};
