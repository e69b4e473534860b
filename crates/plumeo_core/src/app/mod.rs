//! Application state, command dispatch, navigation and the auth modal shell.
//!
//! # Responsibility
//! - Map each user event to one state transition.
//! - Tell the rendering surface what to redraw via `Effect`s.
//!
//! # Invariants
//! - Dispatch is synchronous; one command completes before the next starts.

pub mod auth_modal;
pub mod command;
pub mod navigation;
pub mod state;
