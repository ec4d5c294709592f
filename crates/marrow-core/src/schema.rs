//! glTF 2.0 JSON chunk types.
//!
//! Only the members this tool reads are typed. Everything else — transforms,
//! meshes, buffers, animations, extensions — is captured in order-preserving
//! maps and re-serialized verbatim, so a rename can never disturb data it
//! does not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root object of the glTF JSON chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gltf {
    /// The flat node table, in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,
    /// Every other top-level member, untouched.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A node in the scene graph's flat list.
///
/// `name` is the only member this tool ever writes. The integer
/// cross-references are read for listings; `rest` holds the remainder of the
/// node exactly as it appeared in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node name. Absent and empty names are both legal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Child node indices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
    /// Mesh index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    /// Skin index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin: Option<usize>,
    /// Every other member of the node, untouched.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Node {
    /// Create a bare node with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
