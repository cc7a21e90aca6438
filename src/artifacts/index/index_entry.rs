//! Staging file records
//!
//! A staged addition binds a path to the blob holding its new content; a
//! staged removal only names the path.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::storable_name;
use anyhow::Context;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use std::path::{Path, PathBuf};

/// Size of a binary object id
const OID_SIZE: usize = OBJECT_ID_LENGTH / 2;

/// Size of the path length prefix
const PATH_LENGTH_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAddition {
    pub path: PathBuf,
    pub oid: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedRemoval {
    pub path: PathBuf,
}

impl StagedAddition {
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.oid.write_h40_to(&mut bytes)?;
        write_path(&mut bytes, &self.path)?;

        Ok(bytes)
    }

    pub fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        let oid_bytes = reader.read(OID_SIZE)?;
        let oid = ObjectId::read_h40_from(&mut oid_bytes.as_ref())?;
        let path = read_path(reader)?;

        Ok(StagedAddition { path, oid })
    }
}

impl StagedRemoval {
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        write_path(&mut bytes, &self.path)?;

        Ok(bytes)
    }

    pub fn read_from(reader: &mut Checksum) -> anyhow::Result<Self> {
        Ok(StagedRemoval {
            path: read_path(reader)?,
        })
    }
}

fn write_path(bytes: &mut Vec<u8>, path: &Path) -> anyhow::Result<()> {
    let name = storable_name(path)?;
    let length = u16::try_from(name.len())
        .with_context(|| format!("path {path:?} is too long for the index"))?;

    bytes.write_u16::<NetworkEndian>(length)?;
    bytes.extend_from_slice(name.as_bytes());

    Ok(())
}

fn read_path(reader: &mut Checksum) -> anyhow::Result<PathBuf> {
    let length = NetworkEndian::read_u16(&reader.read(PATH_LENGTH_SIZE)?);
    let name = reader.read(length as usize)?;
    let name = String::from_utf8(name.to_vec()).context("Invalid path in index entry")?;

    Ok(PathBuf::from(name))
}
