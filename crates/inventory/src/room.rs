use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use haulplan_catalog::BoxSize;
use haulplan_core::{Entity, ItemId, RoomId};

/// A room in the customer's home.
///
/// Holds a sparse item-count map and the box size chosen for packing this
/// room's small items. The map never stores a zero quantity: a present key
/// always carries a count of at least one, and decrementing to zero removes
/// the key. An ordered map keeps breakdown output deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub(crate) id: RoomId,
    pub(crate) name: String,
    pub(crate) item_counts: BTreeMap<ItemId, u32>,
    pub(crate) box_size: BoxSize,
}

impl Room {
    /// Create a room with an empty item map and the default box size.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            item_counts: BTreeMap::new(),
            box_size: BoxSize::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn box_size(&self) -> &BoxSize {
        &self.box_size
    }

    pub fn item_counts(&self) -> &BTreeMap<ItemId, u32> {
        &self.item_counts
    }

    /// Current quantity of one item, zero if absent.
    pub fn quantity_of(&self, id: &ItemId) -> u32 {
        self.item_counts.get(id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.item_counts.is_empty()
    }

    /// Increment an item count, creating the entry if absent.
    pub(crate) fn add_item(&mut self, id: ItemId, quantity: u32) {
        *self.item_counts.entry(id).or_insert(0) += quantity;
    }

    /// Decrement an item count, clamping at zero.
    ///
    /// The key is removed rather than ever holding a zero entry; removing an
    /// id that is not present is a no-op.
    pub(crate) fn remove_item(&mut self, id: &ItemId, quantity: u32) {
        if let Some(count) = self.item_counts.get_mut(id) {
            if *count > quantity {
                *count -= quantity;
            } else {
                self.item_counts.remove(id);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.item_counts.clear();
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &RoomId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(RoomId::new(), "Lounge")
    }

    #[test]
    fn adding_accumulates_quantities() {
        let mut room = room();
        let sofa = ItemId::new("sofa_3seater");
        room.add_item(sofa.clone(), 1);
        room.add_item(sofa.clone(), 2);
        assert_eq!(room.quantity_of(&sofa), 3);
    }

    #[test]
    fn removing_clamps_at_zero_and_drops_the_key() {
        let mut room = room();
        let sofa = ItemId::new("sofa_3seater");
        room.add_item(sofa.clone(), 2);

        room.remove_item(&sofa, 5);
        assert_eq!(room.quantity_of(&sofa), 0);
        assert!(!room.item_counts().contains_key(&sofa));
    }

    #[test]
    fn removing_an_absent_item_is_a_no_op() {
        let mut room = room();
        room.remove_item(&ItemId::new("sofa_3seater"), 1);
        assert!(room.is_empty());
    }

    #[test]
    fn new_rooms_use_the_default_box_size() {
        assert_eq!(room().box_size(), &BoxSize::default());
    }
}
