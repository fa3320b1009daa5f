pub mod simulation;
pub mod slot;

use std::time::{SystemTime, UNIX_EPOCH};

pub use simulation::{Simulation, SimulationDraft};
pub use slot::{FileSlotStorage, InMemorySlotStorage, SlotStorage, StorageError};

/// The authoritative in-session list of trade simulations. The store
/// exclusively owns the in-memory collection; the slot is a passive
/// durability layer read once at open and rewritten in full after every
/// mutation.
pub struct SimulationStore<S: SlotStorage> {
    storage: S,
    simulations: Vec<Simulation>,
}

impl<S: SlotStorage> SimulationStore<S> {
    /// Reads the persisted collection once. An absent slot, a load error, or
    /// a malformed payload all normalize to the empty collection; opening
    /// never fails.
    pub fn open(storage: S) -> Self {
        let simulations = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(simulations) => simulations,
                Err(_) => Vec::new(),
            },
            Ok(None) => Vec::new(),
            Err(_) => Vec::new(),
        };

        Self {
            storage,
            simulations,
        }
    }

    /// The live ordered collection, reflecting the latest successful
    /// mutation. Insertion order is preserved.
    pub fn simulations(&self) -> &[Simulation] {
        &self.simulations
    }

    /// Assigns an id, appends the record, and persists the entire collection
    /// before returning. Numeric fields are stored as given.
    pub fn add(&mut self, draft: SimulationDraft) -> Result<u64, StorageError> {
        let id = self.next_id();
        self.simulations.push(draft.with_id(id));
        self.persist()?;
        Ok(id)
    }

    /// Removes every record with the given id, keeping the rest in their
    /// original relative order. A miss still rewrites the unchanged
    /// collection.
    pub fn delete(&mut self, id: u64) -> Result<(), StorageError> {
        self.simulations.retain(|simulation| simulation.id != id);
        self.persist()
    }

    // Current Unix time in milliseconds, bumped past any id already in the
    // collection so two adds within one clock tick stay distinct.
    fn next_id(&self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);

        match self.simulations.iter().map(|simulation| simulation.id).max() {
            Some(taken) if taken >= millis => taken + 1,
            _ => millis,
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.simulations)
            .map_err(|err| StorageError::Serialize(err.to_string()))?;
        self.storage.store(&payload)
    }
}
