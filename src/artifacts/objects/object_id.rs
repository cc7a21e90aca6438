//! Object identifier (SHA-1 digest)
//!
//! Object ids are 40-character lowercase hexadecimal strings. The first two
//! characters name the fan-out directory under `.twig/objects/`, the
//! remaining 38 the file inside it.

use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate a full 40-character hex id
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// SHA-1 digest of an already framed object
    pub fn digest(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Whether `prefix` could abbreviate an object id
    pub fn is_valid_prefix(prefix: &str) -> bool {
        (MIN_PREFIX_LENGTH..=OBJECT_ID_LENGTH).contains(&prefix.len())
            && prefix.chars().all(|c| c.is_ascii_hexdigit())
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(&prefix.to_ascii_lowercase())
    }

    /// Write the id as 20 raw bytes
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let hex40 = self.as_ref();

        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&hex40[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an id written by [`ObjectId::write_h40_to`]
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut raw = [0u8; OBJECT_ID_LENGTH / 2];
        reader.read_exact(&mut raw)?;

        let hex40 = raw.iter().map(|byte| format!("{byte:02x}")).collect();
        Self::try_parse(hex40)
    }

    /// `ab/cdef...` location relative to the objects directory
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
