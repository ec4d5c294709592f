//! GLB (binary glTF) container codec.
//!
//! Splits a `.glb` byte stream into its JSON chunk, optional BIN chunk, and
//! any trailing chunks, and reassembles them with recomputed lengths. Chunk
//! payloads are never interpreted here.

use crate::error::{Error, Result};

/// GLB magic number.
const GLB_MAGIC: u32 = 0x46546C67; // "glTF" in little-endian
/// GLB version 2.
const GLB_VERSION: u32 = 2;
/// JSON chunk type.
const CHUNK_JSON: u32 = 0x4E4F534A; // "JSON" in little-endian
/// Binary chunk type.
const CHUNK_BIN: u32 = 0x004E4942; // "BIN\0" in little-endian

/// A chunk other than the leading JSON/BIN pair, carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraChunk {
    /// Chunk type tag.
    pub kind: u32,
    /// Raw payload, without padding.
    pub data: Vec<u8>,
}

/// A parsed GLB container.
#[derive(Debug, Clone, Default)]
pub struct Glb {
    /// JSON chunk payload.
    pub json: Vec<u8>,
    /// Binary chunk payload, if present.
    pub bin: Option<Vec<u8>>,
    /// Any further chunks, in file order.
    pub extra_chunks: Vec<ExtraChunk>,
}

impl Glb {
    /// Check for the GLB magic number without parsing anything else.
    pub fn sniff(data: &[u8]) -> bool {
        data.len() >= 4 && read_u32(data, 0) == GLB_MAGIC
    }

    /// Parse a GLB container.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() < 12 {
            return Err(Error::InvalidData("GLB file too short".into()));
        }

        let magic = read_u32(data, 0);
        let version = read_u32(data, 4);
        // The header length field is advisory; chunk lengths drive parsing.
        let _length = read_u32(data, 8);

        if magic != GLB_MAGIC {
            return Err(Error::InvalidData("invalid GLB magic".into()));
        }
        if version != GLB_VERSION {
            return Err(Error::Unsupported(format!(
                "GLB version {} not supported",
                version
            )));
        }

        let mut offset = 12;
        let mut json: Option<Vec<u8>> = None;
        let mut bin: Option<Vec<u8>> = None;
        let mut extra_chunks = Vec::new();

        while offset + 8 <= data.len() {
            let chunk_length = read_u32(data, offset) as usize;
            let chunk_type = read_u32(data, offset + 4);
            offset += 8;

            if offset + chunk_length > data.len() {
                return Err(Error::InvalidData("GLB chunk extends past end of file".into()));
            }

            let payload = data[offset..offset + chunk_length].to_vec();
            match chunk_type {
                CHUNK_JSON if json.is_none() => json = Some(payload),
                CHUNK_BIN if bin.is_none() => bin = Some(payload),
                kind => extra_chunks.push(ExtraChunk { kind, data: payload }),
            }

            offset += chunk_length;
            // Chunks are 4-byte aligned
            offset = (offset + 3) & !3;
        }

        let json = json.ok_or_else(|| Error::InvalidData("GLB missing JSON chunk".into()))?;

        Ok(Self {
            json,
            bin,
            extra_chunks,
        })
    }

    /// Serialize the container, recomputing padding and the header length.
    pub fn to_vec(&self) -> Vec<u8> {
        let padded_json_len = padded_len(self.json.len());
        let mut total = 12 + 8 + padded_json_len;
        if let Some(bin) = &self.bin {
            total += 8 + padded_len(bin.len());
        }
        for chunk in &self.extra_chunks {
            total += 8 + padded_len(chunk.data.len());
        }

        let mut output = Vec::with_capacity(total);

        output.extend_from_slice(&GLB_MAGIC.to_le_bytes());
        output.extend_from_slice(&GLB_VERSION.to_le_bytes());
        output.extend_from_slice(&(total as u32).to_le_bytes());

        // JSON chunks are padded with spaces, all others with zeros
        write_chunk(&mut output, CHUNK_JSON, &self.json, 0x20);
        if let Some(bin) = &self.bin {
            write_chunk(&mut output, CHUNK_BIN, bin, 0x00);
        }
        for chunk in &self.extra_chunks {
            write_chunk(&mut output, chunk.kind, &chunk.data, 0x00);
        }

        output
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn write_chunk(output: &mut Vec<u8>, kind: u32, payload: &[u8], pad_byte: u8) {
    let padded = padded_len(payload.len());
    output.extend_from_slice(&(padded as u32).to_le_bytes());
    output.extend_from_slice(&kind.to_le_bytes());
    output.extend_from_slice(payload);
    output.extend(std::iter::repeat(pad_byte).take(padded - payload.len()));
}
