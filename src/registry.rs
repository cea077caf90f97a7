//! Ordered collection of CSS maps, oldest first.

use thiserror::Error;
use tracing::debug;

use crate::symbol_map::SymbolMap;

/// Number of blank slots an editor-facing registry starts with. Library API
/// for front ends that edit maps slot by slot; the CLI loads files instead.
pub const DEFAULT_SLOTS: usize = 3;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("slot {index} is out of range (registry has {len} slots)")]
    SlotOutOfRange { index: usize, len: usize },
}

/// Per-slot view used to show which map definitions failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStatus<'a> {
    pub index: usize,
    pub raw_text: &'a str,
    pub valid: bool,
    pub token_count: usize,
    pub key_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MapRegistry {
    maps: Vec<SymbolMap>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` blank slots, ready for [`MapRegistry::set_map_at`]. Library API
    /// for interactive front ends.
    pub fn with_slots(count: usize) -> Self {
        Self {
            maps: (0..count).map(|_| SymbolMap::blank()).collect(),
        }
    }

    /// Parses each text into its own slot, in order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            maps: texts
                .into_iter()
                .map(|text| SymbolMap::parse(text.as_ref()))
                .collect(),
        }
    }

    /// Appends a blank slot and returns its index.
    pub fn add_slot(&mut self) -> usize {
        self.maps.push(SymbolMap::blank());
        self.maps.len() - 1
    }

    /// Re-parses the slot at `index` from `raw_text`. Writing to the index one
    /// past the end appends a new slot.
    pub fn set_map_at(&mut self, index: usize, raw_text: &str) -> Result<&SymbolMap, RegistryError> {
        let len = self.maps.len();
        if index > len {
            return Err(RegistryError::SlotOutOfRange { index, len });
        }

        let map = SymbolMap::parse(raw_text);
        debug!(index, valid = map.is_valid(), tokens = map.tokens().len(), "css map slot updated");
        if index == len {
            self.maps.push(map);
        } else {
            self.maps[index] = map;
        }
        Ok(&self.maps[index])
    }

    pub fn get(&self, index: usize) -> Option<&SymbolMap> {
        self.maps.get(index)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn maps(&self) -> &[SymbolMap] {
        &self.maps
    }

    /// Maps that can match anything, with their slot index, in slot order.
    pub fn maps_with_tokens(&self) -> impl Iterator<Item = (usize, &SymbolMap)> + '_ {
        self.maps.iter().enumerate().filter(|(_, map)| map.has_tokens())
    }

    /// The last slot, whatever its contents.
    pub fn newest_map(&self) -> Option<&SymbolMap> {
        self.maps.last()
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotStatus<'_>> + '_ {
        self.maps.iter().enumerate().map(|(index, map)| SlotStatus {
            index,
            raw_text: map.raw_text(),
            valid: map.is_valid(),
            token_count: map.tokens().len(),
            key_count: map.semantic_keys().len(),
        })
    }
}
