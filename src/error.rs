//! Unified error type for all store operations.

/// Things that can go wrong when using the stores.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// File system problem (read, write, rename).
    Io(String),
    /// Failed to serialize a collection to bytes.
    Serialize(String),
    /// Failed to deserialize bytes back into a collection.
    Deserialize(String),
    /// Bad configuration (unreadable or malformed config file).
    Config(String),
    /// A product with this id is already registered.
    DuplicateId(String),
    /// No product with this id exists.
    NotFound(String),
    /// The sale asks for more units than the product has in stock.
    InsufficientStock {
        /// Product the sale was recorded against.
        id: String,
        /// Units the sale asked for.
        requested: u32,
        /// Units actually in stock.
        available: u32,
    },
    /// Sales must move at least one unit.
    InvalidQuantity(u32),
    /// Product fields failed validation.
    InvalidProduct(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Error::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::DuplicateId(id) => write!(f, "a product with id '{id}' already exists"),
            Error::NotFound(id) => write!(f, "no product found with id '{id}'"),
            Error::InsufficientStock {
                id,
                requested,
                available,
            } => write!(
                f,
                "insufficient stock for '{id}': requested {requested}, available {available}"
            ),
            Error::InvalidQuantity(qty) => write!(f, "invalid sale quantity: {qty}"),
            Error::InvalidProduct(msg) => write!(f, "invalid product: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
