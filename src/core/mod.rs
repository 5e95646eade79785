//! Core export pipeline
//!
//! Pure projection and slug logic plus the coordinator that drives a run.
//! Nothing in here talks HTTP directly; remote systems come in through the
//! adapter traits.

pub mod export;
pub mod project;
pub mod slug;
