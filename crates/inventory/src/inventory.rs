use std::collections::BTreeMap;

use haulplan_catalog::{BoxSize, Catalog, ItemDefinition};
use haulplan_core::{AggregateRoot, DomainError, DomainResult, Entity, InventoryId, ItemId, RoomId};

use crate::room::Room;

/// Room names pre-created for a fresh estimate.
pub const SEED_ROOM_NAMES: [&str; 6] = [
    "Lounge",
    "Kitchen",
    "Bedroom 1",
    "Bedroom 2",
    "Bathroom",
    "Garage",
];

/// Aggregate root: one customer's move inventory.
///
/// Every operation validates its input first and mutates second, so a
/// rejected operation never leaves partially-updated state. The aggregate
/// version increments once per successful mutation. No operation performs
/// IO; persistence is the caller's collaborator, fed by snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    pub(crate) id: InventoryId,
    pub(crate) rooms: Vec<Room>,
    pub(crate) unassigned: BTreeMap<ItemId, u32>,
    pub(crate) custom_items: Catalog,
    pub(crate) version: u64,
}

impl Inventory {
    /// An inventory with no rooms.
    pub fn empty() -> Self {
        Self::with_id(InventoryId::new())
    }

    pub fn with_id(id: InventoryId) -> Self {
        Self {
            id,
            rooms: Vec::new(),
            unassigned: BTreeMap::new(),
            custom_items: Catalog::new(),
            version: 0,
        }
    }

    /// A fresh inventory pre-seeded with the standard room list.
    pub fn seeded() -> Self {
        let mut inventory = Self::empty();
        for name in SEED_ROOM_NAMES {
            // Seed names are non-blank, so this cannot fail.
            let _ = inventory.add_room(name);
        }
        inventory
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| *room.id() == id)
    }

    pub fn unassigned(&self) -> &BTreeMap<ItemId, u32> {
        &self.unassigned
    }

    pub fn custom_items(&self) -> &Catalog {
        &self.custom_items
    }

    /// Resolve an item id against the built-in catalog and this session's
    /// custom registry.
    pub fn resolve_item<'a>(
        &'a self,
        catalog: &'a Catalog,
        id: &ItemId,
    ) -> Option<&'a ItemDefinition> {
        self.custom_items.resolve(id).or_else(|| catalog.resolve(id))
    }

    /// Append a room with a fresh id, an empty item map and the default box
    /// size.
    pub fn add_room(&mut self, name: impl Into<String>) -> DomainResult<RoomId> {
        let name = name.into();
        ensure_name(&name)?;
        let id = RoomId::new();
        self.rooms.push(Room::new(id, name));
        self.touch();
        Ok(id)
    }

    /// Delete a room and all its item counts. Removing an absent id is a
    /// no-op.
    pub fn remove_room(&mut self, id: RoomId) {
        let before = self.rooms.len();
        self.rooms.retain(|room| *room.id() != id);
        if self.rooms.len() != before {
            self.touch();
        }
    }

    pub fn rename_room(&mut self, id: RoomId, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        ensure_name(&name)?;
        self.room_mut(id)?.name = name;
        self.touch();
        Ok(())
    }

    pub fn set_room_box_size(&mut self, id: RoomId, box_size: BoxSize) -> DomainResult<()> {
        box_size.validate()?;
        self.room_mut(id)?.box_size = box_size;
        self.touch();
        Ok(())
    }

    /// Increment an item count in a room, creating the entry if absent.
    pub fn add_item_to_room(
        &mut self,
        catalog: &Catalog,
        room_id: RoomId,
        item_id: &ItemId,
        quantity: u32,
    ) -> DomainResult<()> {
        self.ensure_known_item(catalog, item_id)?;
        ensure_quantity(quantity)?;
        self.room_mut(room_id)?.add_item(item_id.clone(), quantity);
        self.touch();
        Ok(())
    }

    /// Decrement an item count in a room, clamping at zero rather than going
    /// negative.
    pub fn remove_item_from_room(
        &mut self,
        room_id: RoomId,
        item_id: &ItemId,
        quantity: u32,
    ) -> DomainResult<()> {
        ensure_quantity(quantity)?;
        self.room_mut(room_id)?.remove_item(item_id, quantity);
        self.touch();
        Ok(())
    }

    /// Increment an unassigned item count, creating the entry if absent.
    pub fn add_unassigned_item(
        &mut self,
        catalog: &Catalog,
        item_id: &ItemId,
        quantity: u32,
    ) -> DomainResult<()> {
        self.ensure_known_item(catalog, item_id)?;
        ensure_quantity(quantity)?;
        *self.unassigned.entry(item_id.clone()).or_insert(0) += quantity;
        self.touch();
        Ok(())
    }

    /// Decrement an unassigned item count, clamping at zero. The key is
    /// removed rather than ever holding a zero entry.
    pub fn remove_unassigned_item(&mut self, item_id: &ItemId, quantity: u32) -> DomainResult<()> {
        ensure_quantity(quantity)?;
        if let Some(count) = self.unassigned.get_mut(item_id) {
            if *count > quantity {
                *count -= quantity;
            } else {
                self.unassigned.remove(item_id);
            }
        }
        self.touch();
        Ok(())
    }

    /// Register a user-defined item computed from centimetre dimensions.
    ///
    /// The definition is returned so the caller can present it immediately;
    /// it resolves like any catalog entry from then on.
    pub fn add_custom_item(
        &mut self,
        name: impl Into<String>,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
    ) -> DomainResult<ItemDefinition> {
        let definition =
            ItemDefinition::custom(ItemId::custom(), name, length_cm, width_cm, height_cm)?;
        self.custom_items.push(definition.clone())?;
        self.touch();
        Ok(definition)
    }

    /// Empty every room's item map and the unassigned list.
    ///
    /// Room identities, names and box-size selections survive, as does the
    /// custom registry (definitions are immutable data, not counts).
    pub fn clear_all(&mut self) {
        for room in &mut self.rooms {
            room.clear();
        }
        self.unassigned.clear();
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
    }

    fn room_mut(&mut self, id: RoomId) -> DomainResult<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|room| *room.id() == id)
            .ok_or_else(|| DomainError::unknown_room(id.to_string()))
    }

    fn ensure_known_item(&self, catalog: &Catalog, id: &ItemId) -> DomainResult<()> {
        if self.custom_items.contains(id) || catalog.contains(id) {
            Ok(())
        } else {
            Err(DomainError::unknown_item(id.as_str()))
        }
    }
}

impl AggregateRoot for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &InventoryId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

fn ensure_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        Err(DomainError::validation("room name cannot be empty"))
    } else {
        Ok(())
    }
}

fn ensure_quantity(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        Err(DomainError::validation("quantity must be at least 1"))
    } else {
        Ok(())
    }
}
