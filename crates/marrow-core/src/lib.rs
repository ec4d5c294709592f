//! marrow-core: lossless glTF node renaming for rigged scenes.
//!
//! Loads a glTF 2.0 file (binary `.glb` or JSON `.gltf`), appends an
//! incrementing counter to every node name that starts with a prefix, and
//! writes the result back in the source container format. Everything the
//! tool does not understand — geometry, animations, skins, extensions, the
//! entire BIN chunk — passes through untouched.
//!
//! # Quick Start
//!
//! ```ignore
//! use marrow_core::{rename_matching, Document};
//!
//! let mut doc = Document::load("scene.glb")?;
//! let renamed = rename_matching(&mut doc.gltf.nodes, "Bone");
//! doc.save("scene_renamed.glb")?;
//! println!("renamed {} nodes", renamed);
//! ```
//!
//! # Architecture
//!
//! ```text
//! .glb bytes ─> Glb ─┐                         ┌─> Glb ─> .glb bytes
//!                    ├─> Gltf ─> rename pass ──┤
//! .gltf text ────────┘                         └────────> .gltf text
//! ```
//!
//! The JSON chunk is parsed into [`Gltf`], which types only the node table;
//! all other members ride along as opaque values, so a rename can never
//! disturb data outside node names.

pub mod document;
pub mod error;
pub mod glb;
pub mod rename;
pub mod schema;

pub use document::{Document, Format};
pub use error::{Error, Result};
pub use glb::{ExtraChunk, Glb};
pub use rename::{plan_renames, rename_matching, Rename};
pub use schema::{Gltf, Node};
