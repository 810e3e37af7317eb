//! Terminal UI for Termagotchi.
//!
//! A single ratatui screen: the shell transcript on top, an input line below
//! it and a status bar showing the pet's counters. Passive decay runs off the
//! event loop's poll timeout.

/// Application state and key handling.
pub mod app;
/// Output log and styling shared by the views.
pub mod shared;
/// Terminal setup, teardown, drawing and the event loop.
pub mod terminal;
