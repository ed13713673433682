use std::rc::Rc;

use crate::domain::{Checklist, ItemId, ResetTag};

/// Owns the current checklist snapshot. Replacing it bumps `version`, which the
/// renderer uses to decide whether a redraw is due.
pub struct Store {
    snapshot: Rc<Checklist>,
    version: u64,
}

impl Store {
    pub fn new(initial: Checklist) -> Self {
        Self {
            snapshot: Rc::new(initial),
            version: 0,
        }
    }

    pub fn snapshot(&self) -> Rc<Checklist> {
        Rc::clone(&self.snapshot)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns whether the stored snapshot changed.
    pub fn replace(&mut self, next: Checklist) -> bool {
        if *self.snapshot == next {
            return false;
        }
        self.snapshot = Rc::new(next);
        self.version += 1;
        true
    }

    pub fn toggle(&mut self, category_index: usize, item_id: &ItemId) -> bool {
        let next = self.snapshot.toggle(category_index, item_id);
        let changed = self.replace(next);
        tracing::debug!(category_index, item = %item_id, changed, "toggle");
        changed
    }

    pub fn reset(&mut self, tag: Option<ResetTag>) -> bool {
        let next = self.snapshot.reset_by_tag(tag);
        let changed = self.replace(next);
        tracing::debug!(?tag, changed, "reset");
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_toggle_produces_new_snapshot() {
        let mut store = Store::new(catalog::build().unwrap());
        let before = store.snapshot();

        assert!(store.toggle(0, &ItemId::new("adidas-50")));
        let after = store.snapshot();

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(store.version(), 1);
        assert!(!before.item(0, &ItemId::new("adidas-50")).unwrap().checked);
        assert!(after.item(0, &ItemId::new("adidas-50")).unwrap().checked);
    }

    #[test]
    fn test_noop_keeps_version() {
        let mut store = Store::new(catalog::build().unwrap());
        let before = store.snapshot();

        assert!(!store.toggle(0, &ItemId::new("missing")));
        assert!(!store.reset(Some(ResetTag::All)));
        assert!(!store.reset(None));

        assert_eq!(store.version(), 0);
        assert!(Rc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_reset_green_after_toggle() {
        let mut store = Store::new(catalog::build().unwrap());
        let id = ItemId::new("adidas-50");
        store.toggle(0, &id);
        store.toggle(1, &ItemId::new("busy-1"));

        assert!(store.reset(Some(ResetTag::Green)));
        let snapshot = store.snapshot();
        assert!(!snapshot.item(0, &id).unwrap().checked);
        assert!(snapshot.item(1, &ItemId::new("busy-1")).unwrap().checked);
    }
}
