use crate::list::models::{Baseline, Item, ItemStore};

/// Enough state to put one deleted item back where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    pub deleted_position: usize,
    pub scroll_top: usize,
    /// Position of the deleted item in the baseline, first match wins.
    pub original_index: Option<usize>,
    pub selection_before: usize,
    pub item: Item,
}

/// Stack of deletions not yet undone.
#[derive(Debug, Default)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Captures the record for deleting `deleted_index` from `store`.
    /// Only the log changes; the store is left as is.
    pub fn record_deletion(
        &mut self,
        store: &ItemStore,
        deleted_index: usize,
        baseline: &Baseline,
    ) -> Option<&UndoRecord> {
        let item = store.get(deleted_index)?.clone();
        let original_index = baseline.position_of(&item);
        if original_index.is_none() {
            log::debug!("'{}' has no baseline entry; undo will reuse the captured text", item);
        }

        self.records.push(UndoRecord {
            deleted_position: deleted_index,
            scroll_top: store.scroll_top(),
            original_index,
            selection_before: store.current_index(),
            item,
        });
        self.records.last()
    }

    pub fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    pub fn peek(&self) -> Option<&UndoRecord> {
        self.records.last()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
