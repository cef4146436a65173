use crate::list::models::{Baseline, Item, ItemStore};
use crate::tui::undo::UndoLog;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("list is empty")]
    EmptyStore,
    #[error("no item above the cursor")]
    NoPrevious,
    #[error("nothing to reload")]
    EmptyBaseline,
    #[error("nothing to undo")]
    EmptyUndoLog,
}

/// Owns the live list, the startup snapshot and the undo history.
///
/// Every operation either completes or fails without side effects.
/// On success the new current index is returned.
#[derive(Debug)]
pub struct Controller {
    store: ItemStore,
    baseline: Baseline,
    undo_log: UndoLog,
}

impl Controller {
    pub fn new(baseline: Vec<Item>, start_empty: bool) -> Self {
        let store = if start_empty {
            ItemStore::empty()
        } else {
            ItemStore::new(baseline.clone())
        };
        Self {
            store,
            baseline: Baseline::new(baseline),
            undo_log: UndoLog::new(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    pub fn delete_current(&mut self) -> Result<usize, EditError> {
        if self.store.is_empty() {
            return Err(EditError::EmptyStore);
        }
        let index = self.store.current_index();
        self.delete_at(index)
    }

    /// Deletes the item just above the cursor; the cursor stays on its item.
    pub fn delete_previous(&mut self) -> Result<usize, EditError> {
        if self.store.is_empty() {
            return Err(EditError::EmptyStore);
        }
        let index = self.store.current_index();
        if index == 0 {
            return Err(EditError::NoPrevious);
        }
        self.delete_at(index - 1)
    }

    pub fn reload_all(&mut self) -> Result<usize, EditError> {
        if self.baseline.is_empty() {
            return Err(EditError::EmptyBaseline);
        }
        self.store.set_contents(self.baseline.items().to_vec());
        self.store.set_current_index(0);
        Ok(0)
    }

    pub fn undo(&mut self) -> Result<usize, EditError> {
        let record = self.undo_log.pop().ok_or(EditError::EmptyUndoLog)?;

        let restored = match record.original_index.and_then(|i| self.baseline.get(i)) {
            Some(item) => item.clone(),
            None => record.item,
        };
        let position = self.store.insert(record.deleted_position, restored);
        if position != record.deleted_position {
            log::debug!(
                "undo position {} past end of list, appended at {}",
                record.deleted_position,
                position
            );
        }

        self.store.set_scroll_top(record.scroll_top);
        self.store.set_current_index(record.selection_before);
        Ok(self.store.current_index())
    }

    fn delete_at(&mut self, index: usize) -> Result<usize, EditError> {
        let scroll_top = self.store.scroll_top();
        if self
            .undo_log
            .record_deletion(&self.store, index, &self.baseline)
            .is_none()
        {
            return Err(EditError::EmptyStore);
        }
        self.store.remove(index);

        self.store.set_scroll_top(scroll_top);
        self.store.set_current_index(index);
        self.store.update_scroll();
        Ok(self.store.current_index())
    }
}
