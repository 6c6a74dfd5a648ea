//! Item resolution across the built-in catalog and a session's custom
//! registry.

use haulplan_catalog::{Catalog, ItemDefinition};
use haulplan_core::ItemId;
use haulplan_inventory::Inventory;

/// Read-only view joining the static catalog with one inventory's custom
/// items, so the pipeline stages share a single lookup path.
#[derive(Debug, Clone, Copy)]
pub struct ItemResolver<'a> {
    catalog: &'a Catalog,
    inventory: &'a Inventory,
}

impl<'a> ItemResolver<'a> {
    pub fn new(catalog: &'a Catalog, inventory: &'a Inventory) -> Self {
        Self { catalog, inventory }
    }

    pub fn resolve(&self, id: &ItemId) -> Option<&'a ItemDefinition> {
        self.inventory.resolve_item(self.catalog, id)
    }
}
