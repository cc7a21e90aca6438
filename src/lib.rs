//! twig: a local, single-user version control engine
//!
//! The crate is organized in three layers:
//!
//! - `areas`: the persisted state of a repository (object database, refs,
//!   staging area, working directory) and the `Repository` session owning them
//! - `artifacts`: data structures and algorithms (objects, revisions, merge,
//!   checkout planning, log and status inspection)
//! - `commands`: user-facing operations implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
