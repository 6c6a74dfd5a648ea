//! Raw furniture volume aggregation.

use std::collections::BTreeMap;

use haulplan_catalog::{Catalog, ItemDefinition};
use haulplan_core::ItemId;
use haulplan_inventory::Inventory;

use crate::resolve::ItemResolver;

/// Per-item contribution within one section (a room, or the unassigned
/// list).
#[derive(Debug, Clone)]
pub struct ItemVolume<'a> {
    pub definition: &'a ItemDefinition,
    pub quantity: u32,
    pub subtotal_m3: f64,
}

/// Reduction of one section's item counts.
///
/// References that no longer resolve land in `orphans` and contribute zero
/// volume; an integrity problem must never abort volume computation.
#[derive(Debug, Clone)]
pub struct SectionVolume<'a> {
    pub items: Vec<ItemVolume<'a>>,
    pub volume_m3: f64,
    pub orphans: Vec<ItemId>,
}

/// Reduce one section's counts into per-item contributions and a subtotal.
pub fn section_volume<'a>(
    counts: &BTreeMap<ItemId, u32>,
    resolver: &ItemResolver<'a>,
) -> SectionVolume<'a> {
    let mut items = Vec::with_capacity(counts.len());
    let mut orphans = Vec::new();
    let mut volume_m3 = 0.0;

    for (item_id, &quantity) in counts {
        match resolver.resolve(item_id) {
            Some(definition) => {
                let subtotal_m3 = f64::from(quantity) * definition.unit_volume_m3();
                volume_m3 += subtotal_m3;
                items.push(ItemVolume {
                    definition,
                    quantity,
                    subtotal_m3,
                });
            }
            None => orphans.push(item_id.clone()),
        }
    }

    SectionVolume {
        items,
        volume_m3,
        orphans,
    }
}

/// Whole-inventory furniture volume: every room plus the unassigned list.
///
/// Pure and O(n) in the number of count entries.
pub fn furniture_volume(inventory: &Inventory, catalog: &Catalog) -> f64 {
    let resolver = ItemResolver::new(catalog, inventory);
    let rooms: f64 = inventory
        .rooms()
        .iter()
        .map(|room| section_volume(room.item_counts(), &resolver).volume_m3)
        .sum();
    rooms + section_volume(inventory.unassigned(), &resolver).volume_m3
}
