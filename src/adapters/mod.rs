//! External system adapters
//!
//! Each adapter owns the wire format of one remote system and exposes a
//! narrow trait the core consumes.

pub mod drupal;
pub mod storyblok;
