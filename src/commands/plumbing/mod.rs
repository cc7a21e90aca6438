//! Plumbing commands (direct object access)
//!
//! - `cat-file`: show a stored object
//! - `hash-object`: compute a file's blob id and optionally store it

pub mod cat_file;
pub mod hash_object;
