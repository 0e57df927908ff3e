//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different format (RON, MessagePack, etc.).

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Converts whole collections to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode a collection to bytes.
    fn serialize<T>(&self, items: &[T]) -> Result<Vec<u8>>
    where
        T: Serialize;

    /// Decode bytes back into a collection.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<Vec<T>>
    where
        T: DeserializeOwned;
}

/// JSON serializer with optional pretty-printing.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON, four spaces per level.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// `true` when output is indented.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T>(&self, items: &[T]) -> Result<Vec<u8>>
    where
        T: Serialize,
    {
        let mut buf = Vec::new();
        let res = if self.pretty {
            let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
            items.serialize(&mut ser)
        } else {
            let mut ser = serde_json::Serializer::new(&mut buf);
            items.serialize(&mut ser)
        };
        res.map_err(|e| Error::Serialize(e.to_string()))?;
        Ok(buf)
    }

    fn deserialize<T>(&self, bytes: &[u8]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}
