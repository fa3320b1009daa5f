use std::{
    fmt, fs, io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot storage io error: {err}"),
            Self::Serialize(msg) => write!(f, "slot payload could not be serialized: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(_) => None,
        }
    }
}

/// A single named storage slot. A write always replaces the entire slot
/// content; a read returns the whole payload or `None` when the slot has
/// never been written.
pub trait SlotStorage {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn store(&self, payload: &str) -> Result<(), StorageError>;
}

/// Slot backed by one file on disk.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    path: PathBuf,
}

impl FileSlotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SlotStorage for FileSlotStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn store(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }

        fs::write(&self.path, payload).map_err(StorageError::Io)
    }
}

/// Slot held in memory. Clones share the same slot, so a handle can be kept
/// around to observe what a store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }
}

impl SlotStorage for InMemorySlotStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone())
    }

    fn store(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(payload.to_string());
        Ok(())
    }
}
