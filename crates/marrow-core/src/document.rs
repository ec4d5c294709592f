//! Whole-document load and save.
//!
//! A [`Document`] owns everything needed to write a file back in the
//! container format it was read from: the parsed JSON chunk, the untouched
//! BIN payload, and any extra GLB chunks.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::glb::{ExtraChunk, Glb};
use crate::schema::Gltf;

/// Container format a document was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Binary container (`.glb`).
    Binary,
    /// JSON text (`.gltf`).
    Json,
}

/// An in-memory glTF document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Parsed JSON chunk.
    pub gltf: Gltf,
    /// BIN chunk payload, carried through byte-for-byte.
    pub bin: Option<Vec<u8>>,
    /// GLB chunks beyond JSON and BIN, carried through byte-for-byte.
    pub extra_chunks: Vec<ExtraChunk>,
    /// Source format; [`Document::to_vec`] writes the same format back.
    pub format: Format,
}

impl Document {
    /// Parse a document from raw file bytes, sniffing the container format.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if Glb::sniff(data) {
            let glb = Glb::from_slice(data)?;
            let gltf = serde_json::from_slice(&glb.json)?;
            return Ok(Self {
                gltf,
                bin: glb.bin,
                extra_chunks: glb.extra_chunks,
                format: Format::Binary,
            });
        }

        // JSON glTF starts with an object; anything else is not a scene file
        let looks_like_json = std::str::from_utf8(data)
            .map(|text| text.trim_start().starts_with('{'))
            .unwrap_or(false);
        if !looks_like_json {
            return Err(Error::InvalidData("not a GLB or glTF JSON file".into()));
        }

        let gltf = serde_json::from_slice(data)?;
        Ok(Self {
            gltf,
            bin: None,
            extra_chunks: Vec::new(),
            format: Format::Json,
        })
    }

    /// Read and parse a document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_slice(&data)
    }

    /// Serialize the document in its source format.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        match self.format {
            Format::Binary => {
                let glb = Glb {
                    json: serde_json::to_vec(&self.gltf)?,
                    bin: self.bin.clone(),
                    extra_chunks: self.extra_chunks.clone(),
                };
                Ok(glb.to_vec())
            }
            Format::Json => Ok(serde_json::to_vec(&self.gltf)?),
        }
    }

    /// Serialize and write the document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.to_vec()?;
        fs::write(path, data)?;
        Ok(())
    }
}
