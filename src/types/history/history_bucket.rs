use lazysort::SortedBy;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_HISTORY_ITEMS;
use crate::types::history::HistoryItem;

/// Bounded, de-duplicated play history, keyed by game id. Persisted as a
/// plain JSON array under a single storage key and rewritten in full on
/// every mutation. Entries never expire on their own; eviction happens only
/// through the size bound.
#[derive(Default, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct HistoryBucket {
    pub items: Vec<HistoryItem>,
}

impl HistoryBucket {
    pub fn new(items: Vec<HistoryItem>) -> Self {
        HistoryBucket { items }
    }
    /// Upserts the entry, then drops the least recently played entries when
    /// the bound is exceeded. After the call the entry is present, no two
    /// entries share an id and `len() <= MAX_HISTORY_ITEMS`.
    pub fn record(&mut self, item: HistoryItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        };
        if self.items.len() > MAX_HISTORY_ITEMS {
            self.items
                .sort_by(|a, b| b.last_played.cmp(&a.last_played));
            self.items.truncate(MAX_HISTORY_ITEMS);
        };
    }
    /// Most recently played first, regardless of storage order.
    pub fn sorted_items(&self) -> Vec<&HistoryItem> {
        self.items
            .iter()
            .sorted_by(|a, b| b.last_played.cmp(&a.last_played))
            .collect()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
