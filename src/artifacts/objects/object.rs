use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;

pub trait Packable {
    /// Canonical serialization, header included
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Decode an object body; the header has already been consumed
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::digest(&content))
    }
}

/// Prefix a body with its `<type> <size>\0` header
pub fn frame(object_type: ObjectType, body: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), body.len());

    let mut framed = Vec::with_capacity(header.len() + body.len());
    framed.extend_from_slice(header.as_bytes());
    framed.extend_from_slice(body);

    Bytes::from(framed)
}

#[derive(Debug, Clone)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(blob) => blob.object_type(),
            ObjectBox::Commit(commit) => commit.object_type(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
