//! Shared collaborators

pub mod clock;
