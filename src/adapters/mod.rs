//! Adapters module — user-facing front ends.
//!
//! Each adapter owns a [`crate::agent::Session`] and drives the turn
//! controller with user input. Only the CLI is implemented; the turn
//! controller itself is front-end agnostic.

pub mod cli;
