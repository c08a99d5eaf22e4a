//! Display-side controller: app state, event handling, action dispatch and
//! the periodic tick source.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
pub mod ticker;
