//! Terminal stopwatch with lap recording.
//!
//! [`engine`] holds the timing core and can be used on its own; [`app`] and
//! [`ui`] drive it from a ratatui terminal front end.

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod ui;
