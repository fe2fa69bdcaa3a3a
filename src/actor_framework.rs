use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be held in a [`Repository`].
pub trait Entity: Clone + Debug + Send + 'static {
    type Id: Copy + Eq + Ord + Hash + Display + Debug + Send + From<u64>;
    type CreateParams: Debug + Send;
    type Error;

    /// Build the entity from its creation payload. Runs before an id is
    /// allocated, so a rejected payload never consumes an id.
    fn from_create_params(params: Self::CreateParams) -> Result<Self, Self::Error>;
}

// =============================================================================
// 2. THE LISTING RESULT
// =============================================================================

/// Result of a list operation. An empty store answers with `Empty` rather than
/// an empty `Items`, so callers can tell "nothing here" apart from data.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Empty,
    Items(Vec<T>),
}

impl<T> Listing<T> {
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Items(items) => items.len(),
        }
    }

    #[cfg(test)]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Empty => Vec::new(),
            Listing::Items(items) => items,
        }
    }
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// In-memory map of entities with its own monotonically increasing id counter.
#[derive(Debug)]
pub struct Repository<T: Entity> {
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, params: T::CreateParams) -> Result<(T::Id, T), T::Error> {
        let item = T::from_create_params(params)?;
        let id = self.insert(item.clone());
        Ok((id, item))
    }

    /// Store an already-built entity under the next id.
    pub fn insert(&mut self, item: T) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        self.store.insert(id, item);
        id
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.get_mut(id)
    }

    /// All entities, sorted by id.
    pub fn list(&self) -> Listing<(T::Id, T)> {
        let mut items: Vec<(T::Id, T)> = self
            .store
            .iter()
            .map(|(id, item)| (*id, item.clone()))
            .collect();
        items.sort_by_key(|(id, _)| *id);
        Listing::from_vec(items)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.store.len()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
