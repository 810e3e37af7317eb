//! Core types for Termagotchi: the virtual pet and the virtual filesystem.
//!
//! This crate knows nothing about commands or terminals. It defines the pet's
//! clamped counters and status rendering, and an in-memory tree of
//! directories and text files that can be navigated, written by the status
//! renderer, and round-tripped through JSON.

/// Error types used throughout the crate.
pub mod error;
/// In-memory filesystem tree, working directory, and JSON document format.
pub mod fs;
/// Pet counters, moods, and status text rendering.
pub mod pet;

/// Re-export error types.
pub use error::{FsError, FsResult};
/// Re-export filesystem types.
pub use fs::{Directory, Node, VirtualFilesystem, WorkingDirectory};
/// Re-export pet types.
pub use pet::{Flavor, HappinessMood, HungerMood, PetState};
