//! Entity registries: id → coordinate maps that index grid content.
//!
//! Registries only grow. A collected dragon ball keeps its entry.

use std::collections::BTreeMap;

use dragonradar_core::types::GridPos;

/// Ordered map from entity id to the cell it occupies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityRegistry {
    entries: BTreeMap<u32, GridPos>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record entity `id` at `pos`.
    ///
    /// Panics if `id` is already registered.
    pub fn insert(&mut self, id: u32, pos: GridPos) {
        let previous = self.entries.insert(id, pos);
        assert!(previous.is_none(), "entity id {id} registered twice");
    }

    /// Position of entity `id`.
    pub fn get(&self, id: u32) -> Option<GridPos> {
        self.entries.get(&id).copied()
    }

    /// Id of the entity occupying `pos`, if any.
    pub fn id_at(&self, pos: GridPos) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, p)| **p == pos)
            .map(|(id, _)| *id)
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, GridPos)> + '_ {
        self.entries.iter().map(|(&id, &pos)| (id, pos))
    }

    /// All occupied positions in id order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.entries.values().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
