/// A single display string shown in the list.
pub type Item = String;

const DEFAULT_VIEWPORT: usize = 20;

/// The full item set captured at startup. Never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Baseline {
    items: Vec<Item>,
}

impl Baseline {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// First position holding `item`, scanning from the start.
    pub fn position_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

/// The live list plus its selection and scroll position.
///
/// `current` always lies in `[0, len)` for a non-empty store and is pinned
/// to 0 when the store is empty.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    current: usize,
    scroll_top: usize,
    viewport: usize,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            current: 0,
            scroll_top: 0,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn contents(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current)
    }

    /// Replaces the whole sequence and resets the scroll position.
    pub fn set_contents(&mut self, items: Vec<Item>) {
        self.items = items;
        self.scroll_top = 0;
        self.current = self.clamp_index(self.current);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn set_current_index(&mut self, index: usize) {
        self.current = self.clamp_index(index);
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, top: usize) {
        self.scroll_top = self.clamp_index(top);
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Called by the renderer once the list area height is known.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.update_scroll();
    }

    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Inserts at `index`, or appends when `index` is past the end.
    /// Returns the position actually used.
    pub fn insert(&mut self, index: usize, item: Item) -> usize {
        let position = index.min(self.items.len());
        self.items.insert(position, item);
        position
    }

    pub fn move_up(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.update_scroll();
        }
    }

    pub fn move_down(&mut self) {
        if self.current < self.items.len().saturating_sub(1) {
            self.current += 1;
            self.update_scroll();
        }
    }

    pub fn move_home(&mut self) {
        self.current = 0;
        self.update_scroll();
    }

    pub fn move_end(&mut self) {
        self.current = self.items.len().saturating_sub(1);
        self.update_scroll();
    }

    pub fn page_up(&mut self) {
        self.current = self.current.saturating_sub(self.viewport());
        self.update_scroll();
    }

    pub fn page_down(&mut self) {
        self.current = self.clamp_index(self.current + self.viewport());
        self.update_scroll();
    }

    /// Keeps the selected item inside the visible window.
    pub fn update_scroll(&mut self) {
        if self.current < self.scroll_top {
            self.scroll_top = self.current;
        } else if self.current >= self.scroll_top + self.viewport {
            self.scroll_top = self.current.saturating_sub(self.viewport - 1);
        }
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.items.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<Item> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_current_index_clamps_to_last_item() {
        let mut store = ItemStore::new(names(&["a", "b", "c"]));
        store.set_current_index(7);
        assert_eq!(store.current_index(), 2);
    }

    #[test]
    fn test_set_current_index_on_empty_store_pins_to_zero() {
        let mut store = ItemStore::empty();
        store.set_current_index(3);
        assert_eq!(store.current_index(), 0);
        assert!(store.current_item().is_none());
    }

    #[test]
    fn test_set_contents_resets_scroll_top() {
        let mut store = ItemStore::new(names(&["a", "b", "c", "d"]));
        store.set_scroll_top(2);
        store.set_current_index(3);
        store.set_contents(names(&["x", "y"]));
        assert_eq!(store.scroll_top(), 0);
        assert_eq!(store.current_index(), 1);
        assert_eq!(store.contents(), names(&["x", "y"]).as_slice());
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut store = ItemStore::new(names(&["a"]));
        let position = store.insert(5, "b".to_string());
        assert_eq!(position, 1);
        assert_eq!(store.contents(), names(&["a", "b"]).as_slice());
    }

    #[test]
    fn test_remove_out_of_range_returns_none() {
        let mut store = ItemStore::new(names(&["a"]));
        assert!(store.remove(1).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_move_down_scrolls_viewport() {
        let mut store = ItemStore::new(names(&["a", "b", "c", "d", "e"]));
        store.set_viewport(2);
        store.move_down();
        store.move_down();
        assert_eq!(store.current_index(), 2);
        assert_eq!(store.scroll_top(), 1);

        store.move_home();
        assert_eq!(store.scroll_top(), 0);
    }

    #[test]
    fn test_move_down_stops_at_last_item() {
        let mut store = ItemStore::new(names(&["a", "b"]));
        store.move_down();
        store.move_down();
        assert_eq!(store.current_index(), 1);

        store.move_up();
        store.move_up();
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_page_navigation() {
        let mut store = ItemStore::new(names(&["a", "b", "c", "d", "e", "f", "g"]));
        store.set_viewport(3);
        store.page_down();
        assert_eq!(store.current_index(), 3);
        store.page_down();
        store.page_down();
        assert_eq!(store.current_index(), 6);
        assert_eq!(store.scroll_top(), 4);
        store.page_up();
        assert_eq!(store.current_index(), 3);
        store.move_end();
        assert_eq!(store.current_index(), 6);
    }

    #[test]
    fn test_baseline_position_of_returns_first_match() {
        let baseline = Baseline::new(names(&["dup", "x", "dup"]));
        assert_eq!(baseline.position_of("dup"), Some(0));
        assert_eq!(baseline.position_of("missing"), None);
    }
}
