//! Staging file format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "STAG" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Additions count (4 bytes)
//!   - Removals count (4 bytes)
//!
//! Additions:
//!   - Blob id (20 bytes), path length (2 bytes), path
//!
//! Removals:
//!   - Path length (2 bytes), path
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! Integers are stored in network byte order.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of the staging file header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying staging files
pub const SIGNATURE: &str = "STAG";

/// Staging file format version
pub const VERSION: u32 = 1;
