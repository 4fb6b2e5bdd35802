//! Core data structures for the shoal simulation.

pub mod agent;
pub mod event;
pub mod particle;
pub mod state;
