//! Stored object types
//!
//! Everything the repository records is an immutable object identified by the
//! SHA-1 digest of its serialized form `<type> <size>\0<body>`:
//!
//! - **Blob**: raw file content
//! - **Commit**: a snapshot record (timestamp, parents, tree, message)
//!
//! The `Tree` type is the path to blob mapping embedded in every commit.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest id prefix accepted when resolving user input
pub const MIN_PREFIX_LENGTH: usize = 1;
