use uuid::Uuid;

use crate::item::ClipboardItem;

/// Favorite-priority truncation: favorites first, then the rest, each group
/// keeping its relative order, cut to `limit` entries. A non-positive limit
/// empties the list.
pub fn truncate(items: Vec<ClipboardItem>, limit: i64) -> Vec<ClipboardItem> {
    if limit <= 0 {
        return Vec::new();
    }
    let (favorites, rest): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|item| item.is_favorite);
    favorites
        .into_iter()
        .chain(rest)
        .take(limit as usize)
        .collect()
}

/// Ordered, favorite-priority-truncating history container.
///
/// Pure and synchronous. The repository owns the store behind a
/// `tokio::sync::Mutex`, so at most one mutation is in flight at any instant
/// and the truncation invariant holds after every operation.
#[derive(Debug, Default)]
pub struct HistoryStore {
    items: Vec<ClipboardItem>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current contents, most-recent-first.
    pub fn all(&self) -> Vec<ClipboardItem> {
        self.items.clone()
    }

    /// Replaces the contents with `truncate(items, limit)`. Used once at
    /// startup after loading persisted history, and again when the limit
    /// changes.
    pub fn set_initial(&mut self, items: Vec<ClipboardItem>, limit: i64) -> Vec<ClipboardItem> {
        self.items = truncate(items, limit);
        self.all()
    }

    /// Inserts a capture at the head, merging with an existing entry of
    /// identical content: the existing id survives, the favorite flags are
    /// OR-ed, and the new capture wins for timestamp, content, type and
    /// metadata.
    pub fn insert(&mut self, item: ClipboardItem, limit: i64) -> Vec<ClipboardItem> {
        if let Some(pos) = self
            .items
            .iter()
            .position(|existing| existing.content == item.content)
        {
            let existing = self.items.remove(pos);
            let merged = ClipboardItem {
                id: existing.id,
                is_favorite: existing.is_favorite || item.is_favorite,
                ..item
            };
            self.items.insert(0, merged);
        } else {
            self.items.insert(0, item);
        }
        self.items = truncate(std::mem::take(&mut self.items), limit);
        self.all()
    }

    /// Flips the favorite flag of the matching item and re-truncates.
    ///
    /// Returns `(None, unchanged)` when no item matches, and `(None, list)`
    /// when the toggled item fell outside the truncation window (possible
    /// after un-favoriting while over the current limit).
    pub fn toggle_favorite(
        &mut self,
        id: Uuid,
        limit: i64,
    ) -> (Option<ClipboardItem>, Vec<ClipboardItem>) {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return (None, self.all());
        };

        self.items[pos].is_favorite = !self.items[pos].is_favorite;
        let toggled = self.items[pos].clone();
        self.items = truncate(std::mem::take(&mut self.items), limit);

        let survived = self.items.iter().any(|item| item.id == id);
        (survived.then_some(toggled), self.all())
    }

    /// Removes the matching item. The list only shrinks, so no re-truncation
    /// is needed.
    pub fn delete(&mut self, id: Uuid) -> Vec<ClipboardItem> {
        self.items.retain(|item| item.id != id);
        self.all()
    }

    pub fn clear(&mut self) -> Vec<ClipboardItem> {
        self.items.clear();
        self.all()
    }

    /// Keeps only favorited items, regardless of the limit.
    pub fn clear_non_favorites(&mut self) -> Vec<ClipboardItem> {
        self.items.retain(|item| item.is_favorite);
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ContentType;

    fn item(content: &str) -> ClipboardItem {
        ClipboardItem::new(content, ContentType::Text)
    }

    fn favorite(content: &str) -> ClipboardItem {
        let mut item = item(content);
        item.is_favorite = true;
        item
    }

    fn contents(items: &[ClipboardItem]) -> Vec<&str> {
        items.iter().map(|item| item.content.as_str()).collect()
    }

    #[test]
    fn truncate_prioritizes_favorites() {
        let result = truncate(vec![favorite("A"), item("B"), item("C")], 2);
        assert_eq!(contents(&result), vec!["A", "B"]);
    }

    #[test]
    fn truncate_preserves_relative_order_within_groups() {
        let result = truncate(
            vec![item("n1"), favorite("f1"), item("n2"), favorite("f2")],
            4,
        );
        assert_eq!(contents(&result), vec!["f1", "f2", "n1", "n2"]);
    }

    #[test]
    fn truncate_with_non_positive_limit_is_empty() {
        assert!(truncate(vec![item("A"), favorite("B")], 0).is_empty());
        assert!(truncate(vec![item("A")], -3).is_empty());
    }

    #[test]
    fn insert_places_new_item_at_head() {
        let mut store = HistoryStore::new();
        store.insert(item("first"), 10);
        let result = store.insert(item("second"), 10);
        assert_eq!(contents(&result), vec!["second", "first"]);
    }

    #[test]
    fn insert_merges_on_recapture() {
        let mut store = HistoryStore::new();
        let a = item("A");
        let b = item("B");
        let original_id = b.id;
        store.set_initial(vec![a, b], 10);

        let recapture = item("B");
        let new_timestamp = recapture.captured_at;
        let result = store.insert(recapture, 10);

        assert_eq!(contents(&result), vec!["B", "A"]);
        assert_eq!(result[0].id, original_id);
        assert!(!result[0].is_favorite);
        assert_eq!(result[0].captured_at, new_timestamp);
    }

    #[test]
    fn insert_merge_keeps_favorite_flag_from_either_side() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![favorite("keep")], 10);

        let result = store.insert(item("keep"), 10);
        assert!(result[0].is_favorite);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn insert_merge_takes_new_capture_type_and_metadata() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![item("https://example.com/")], 10);

        let mut recapture = ClipboardItem::new("https://example.com/", ContentType::Link);
        recapture.metadata.source_app_name = Some("Browser".to_string());
        let result = store.insert(recapture, 10);

        assert_eq!(result[0].content_type, ContentType::Link);
        assert_eq!(
            result[0].metadata.source_app_name.as_deref(),
            Some("Browser")
        );
    }

    #[test]
    fn insert_respects_limit() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![favorite("fav"), item("old")], 2);
        let result = store.insert(item("new"), 2);
        assert_eq!(contents(&result), vec!["fav", "new"]);
    }

    #[test]
    fn toggle_favorite_of_absent_id_leaves_list_unchanged() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![item("A")], 10);

        let (updated, items) = store.toggle_favorite(Uuid::new_v4(), 10);
        assert!(updated.is_none());
        assert_eq!(contents(&items), vec!["A"]);
    }

    #[test]
    fn toggle_favorite_flips_flag() {
        let mut store = HistoryStore::new();
        let a = item("A");
        let id = a.id;
        store.set_initial(vec![a, item("B")], 10);

        let (updated, _) = store.toggle_favorite(id, 10);
        assert!(updated.unwrap().is_favorite);

        let (updated, _) = store.toggle_favorite(id, 10);
        assert!(!updated.unwrap().is_favorite);
    }

    #[test]
    fn toggle_off_can_evict_under_a_tighter_limit() {
        let mut store = HistoryStore::new();
        let target = favorite("f3");
        let id = target.id;
        store.set_initial(vec![favorite("f1"), favorite("f2"), target], 3);

        let (updated, items) = store.toggle_favorite(id, 2);
        assert!(updated.is_none());
        assert_eq!(contents(&items), vec!["f1", "f2"]);
    }

    #[test]
    fn delete_removes_matching_item() {
        let mut store = HistoryStore::new();
        let a = item("A");
        let id = a.id;
        store.set_initial(vec![a, item("B")], 10);

        let items = store.delete(id);
        assert_eq!(contents(&items), vec!["B"]);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![item("A"), favorite("B")], 10);
        assert!(store.clear().is_empty());
    }

    #[test]
    fn clear_non_favorites_keeps_only_favorites() {
        let mut store = HistoryStore::new();
        store.set_initial(vec![favorite("keep"), item("drop"), favorite("also")], 10);
        let items = store.clear_non_favorites();
        assert_eq!(contents(&items), vec!["keep", "also"]);
        assert!(items.iter().all(|item| item.is_favorite));
    }
}
