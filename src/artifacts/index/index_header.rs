use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use anyhow::anyhow;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexHeader {
    pub marker: String,
    pub version: u32,
    pub additions_count: u32,
    pub removals_count: u32,
}

impl IndexHeader {
    pub fn for_counts(additions_count: usize, removals_count: usize) -> anyhow::Result<Self> {
        Ok(IndexHeader {
            marker: String::from(SIGNATURE),
            version: VERSION,
            additions_count: u32::try_from(additions_count)?,
            removals_count: u32::try_from(removals_count)?,
        })
    }

    pub fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        bytes.write_all(self.marker.as_bytes())?;
        bytes.write_u32::<NetworkEndian>(self.version)?;
        bytes.write_u32::<NetworkEndian>(self.additions_count)?;
        bytes.write_u32::<NetworkEndian>(self.removals_count)?;

        Ok(Bytes::from(bytes))
    }

    pub fn deserialize(bytes: &[u8]) -> anyhow::Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(anyhow!("Invalid header size"));
        }

        let marker = String::from_utf8(bytes[0..4].to_vec())
            .map_err(|_| anyhow!("Invalid marker in index header"))?;
        if marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        let version = NetworkEndian::read_u32(&bytes[4..8]);
        if version != VERSION {
            return Err(anyhow!("Unsupported index file version: {version}"));
        }

        Ok(IndexHeader {
            marker,
            version,
            additions_count: NetworkEndian::read_u32(&bytes[8..12]),
            removals_count: NetworkEndian::read_u32(&bytes[12..16]),
        })
    }
}
