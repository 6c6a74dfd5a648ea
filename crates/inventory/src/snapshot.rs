use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use haulplan_catalog::{BoxSize, Catalog, ItemDefinition};
use haulplan_core::{InventoryId, ItemId, RoomId};

use crate::inventory::Inventory;
use crate::room::Room;

/// One item-id/quantity pair in a serialized inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Serialized form of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub name: String,
    pub box_size: BoxSize,
    pub items: Vec<ItemCount>,
}

/// Wholesale serialized form of an inventory.
///
/// The same structure crosses the boundary in both directions: persistence
/// collaborators store it, and `Inventory::restore` rebuilds state from it.
/// The engine has no opinion on the transport encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub rooms: Vec<RoomSnapshot>,
    pub custom_items: Vec<ItemDefinition>,
    pub unassigned_items: Vec<ItemCount>,
    pub saved_at: DateTime<Utc>,
}

/// Outcome of restoring a snapshot.
///
/// `dropped` lists the item references that had to be discarded because they
/// no longer resolve (or carried a zero quantity); restore itself never fails
/// on content grounds.
#[derive(Debug)]
pub struct RestoredInventory {
    pub inventory: Inventory,
    pub dropped: Vec<ItemId>,
}

impl Inventory {
    /// Capture the current state for persistence.
    ///
    /// `saved_at` is caller-supplied so tests stay deterministic.
    pub fn snapshot(&self, saved_at: DateTime<Utc>) -> InventorySnapshot {
        InventorySnapshot {
            rooms: self
                .rooms
                .iter()
                .map(|room| RoomSnapshot {
                    id: room.id,
                    name: room.name.clone(),
                    box_size: room.box_size.clone(),
                    items: counts_to_entries(&room.item_counts),
                })
                .collect(),
            custom_items: self.custom_items.iter().cloned().collect(),
            unassigned_items: counts_to_entries(&self.unassigned),
            saved_at,
        }
    }

    /// Rebuild an inventory from a serialized snapshot.
    ///
    /// Item references are validated against the built-in catalog plus the
    /// snapshot's own custom definitions. Content problems never fail the
    /// load: unresolvable references, zero quantities and invalid custom
    /// definitions are dropped and reported instead, and a room whose stored
    /// box size fails validation falls back to the default size.
    pub fn restore(snapshot: InventorySnapshot, catalog: &Catalog) -> RestoredInventory {
        let mut inventory = Inventory::with_id(InventoryId::new());
        let mut dropped = Vec::new();

        for definition in snapshot.custom_items {
            let id = definition.id().clone();
            if inventory.custom_items.push(definition).is_err() {
                dropped.push(id);
            }
        }

        for room_snapshot in snapshot.rooms {
            let mut room = Room::new(room_snapshot.id, room_snapshot.name);
            if room_snapshot.box_size.validate().is_ok() {
                room.box_size = room_snapshot.box_size;
            }
            for entry in room_snapshot.items {
                if entry.quantity == 0
                    || !(inventory.custom_items.contains(&entry.item_id)
                        || catalog.contains(&entry.item_id))
                {
                    dropped.push(entry.item_id);
                    continue;
                }
                room.add_item(entry.item_id, entry.quantity);
            }
            inventory.rooms.push(room);
        }

        for entry in snapshot.unassigned_items {
            if entry.quantity == 0
                || !(inventory.custom_items.contains(&entry.item_id)
                    || catalog.contains(&entry.item_id))
            {
                dropped.push(entry.item_id);
                continue;
            }
            *inventory.unassigned.entry(entry.item_id).or_insert(0) += entry.quantity;
        }

        inventory.touch();
        RestoredInventory { inventory, dropped }
    }
}

fn counts_to_entries(counts: &std::collections::BTreeMap<ItemId, u32>) -> Vec<ItemCount> {
    counts
        .iter()
        .map(|(item_id, &quantity)| ItemCount {
            item_id: item_id.clone(),
            quantity,
        })
        .collect()
}
