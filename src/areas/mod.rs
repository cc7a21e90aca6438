//! Persisted repository state
//!
//! - `database`: content-addressed object store for blobs and commits
//! - `index`: staging area of pending additions and removals
//! - `refs`: branch pointers and HEAD
//! - `repository`: the session value owning all of the above
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
