//! Whole-file JSON collection and its builder.

use crate::error::Result;
use crate::persist::{atomic_write, load};
use crate::serializer::{JsonSerializer, Serializer};
use log::{debug, error};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A collection of `T` persisted as one JSON array in one file.
///
/// Nothing is cached between calls: every read goes to disk and every write
/// replaces the whole file. [`modify`](Self::modify) runs a full
/// load-mutate-save cycle under an in-process lock; other processes touching
/// the same file are not coordinated with, last write wins.
pub struct JsonFile<T> {
    path: PathBuf,
    serializer: JsonSerializer,
    cycle: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Collection at `path` with pretty-printed output.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::builder(path).build()
    }

    /// Start configuring a collection. Call [`.build()`](JsonFileBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> JsonFileBuilder<T> {
        JsonFileBuilder::new(path)
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection. Missing or empty file gives an empty vec;
    /// malformed content is an error.
    pub fn load(&self) -> Result<Vec<T>> {
        let items = load(&self.path, &self.serializer)?;
        debug!("loaded {} records from {}", items.len(), self.path.display());
        Ok(items)
    }

    /// Like [`load`](Self::load), but a file that can't be read or parsed is
    /// logged and treated as empty. The next save overwrites it.
    pub fn load_or_empty(&self) -> Vec<T> {
        match self.load() {
            Ok(items) => items,
            Err(e) => {
                error!(
                    "discarding unreadable collection {}: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replace the file contents with `items` (atomic temp-file + rename).
    pub fn save(&self, items: &[T]) -> Result<()> {
        let bytes = self.serializer.serialize(items)?;
        atomic_write(&self.path, &bytes)?;
        debug!("wrote {} records to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Reload, hand the collection to `f`, and rewrite the file only if `f`
    /// returned `Ok`. An `Err` from `f` leaves the file untouched.
    pub fn modify<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let _cycle = self.cycle.lock();
        let mut items = self.load_or_empty();
        let out = f(&mut items)?;
        self.save(&items)?;
        Ok(out)
    }
}

impl<T> std::fmt::Debug for JsonFile<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFile")
            .field("path", &self.path)
            .field("pretty", &self.serializer.is_pretty())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures a [`JsonFile`].
///
/// ```rust,no_run
/// use stockbook::{JsonFile, Product};
///
/// let products = JsonFile::<Product>::builder("products.json")
///     .pretty(false)
///     .build();
/// ```
pub struct JsonFileBuilder<T> {
    path: PathBuf,
    pretty: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileBuilder<T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
            _marker: PhantomData,
        }
    }

    /// Write human-readable JSON with indentation (default: pretty).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Finish configuration. Nothing is read until the first operation.
    pub fn build(self) -> JsonFile<T> {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };
        JsonFile {
            path: self.path,
            serializer,
            cycle: Mutex::new(()),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for JsonFileBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}
