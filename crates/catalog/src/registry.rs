use std::collections::HashMap;

use haulplan_core::{DomainError, DomainResult, ItemId};

use crate::item::{ItemCategory, ItemDefinition};

/// Append-only item registry.
///
/// Definitions live in an arena and are resolved by id through an index map.
/// The same structure backs both the process-wide built-in table and each
/// session's custom registry; definitions are never removed or mutated once
/// accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ItemDefinition>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// An empty registry (used for per-session custom items).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in registry of common household items.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for item in builtin_items() {
            // Built-in definitions are statically valid with distinct ids.
            let _ = catalog.push(item);
        }
        catalog
    }

    /// Append a definition.
    ///
    /// Re-validates the definition (snapshots bypass the constructors) and
    /// rejects duplicate ids; the registry is unchanged on error.
    pub fn push(&mut self, item: ItemDefinition) -> DomainResult<()> {
        item.validate()?;
        if self.index.contains_key(item.id()) {
            return Err(DomainError::validation(format!(
                "duplicate item id: {}",
                item.id()
            )));
        }
        self.index.insert(item.id().clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn resolve(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.index.get(id).map(|&slot| &self.items[slot])
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The built-in household item table.
///
/// Volumes are typical single-unit figures in cubic metres. Fragile entries
/// carry their packing-box equivalent at the 0.14 m³ reference box.
fn builtin_items() -> Vec<ItemDefinition> {
    use ItemCategory::*;

    vec![
        ItemDefinition::builtin("sofa_2seater", "Sofa (2 seater)", 2.4, Seating, None),
        ItemDefinition::builtin("sofa_3seater", "Sofa (3 seater)", 3.2, Seating, None),
        ItemDefinition::builtin("armchair", "Armchair", 1.2, Seating, None),
        ItemDefinition::builtin("dining_chair", "Dining chair", 0.35, Seating, None),
        ItemDefinition::builtin("office_chair", "Office chair", 0.5, Seating, None),
        ItemDefinition::builtin("dining_table", "Dining table", 1.8, Table, None),
        ItemDefinition::builtin("coffee_table", "Coffee table", 0.45, Table, None),
        ItemDefinition::builtin("desk", "Desk", 1.1, Table, None),
        ItemDefinition::builtin("bedside_table", "Bedside table", 0.25, Table, None),
        ItemDefinition::builtin("bed_double", "Double bed", 2.8, Bed, None),
        ItemDefinition::builtin("bed_single", "Single bed", 1.9, Bed, None),
        ItemDefinition::builtin("cot", "Cot", 0.9, Bed, None),
        ItemDefinition::builtin("wardrobe_double", "Double wardrobe", 2.2, Storage, None),
        ItemDefinition::builtin("chest_of_drawers", "Chest of drawers", 0.8, Storage, None),
        ItemDefinition::builtin("bookcase", "Bookcase", 1.0, Storage, None),
        ItemDefinition::builtin("shoe_rack", "Shoe rack", 0.12, Storage, None),
        ItemDefinition::builtin("washing_machine", "Washing machine", 0.55, Appliance, None),
        ItemDefinition::builtin("fridge_freezer", "Fridge freezer", 1.3, Appliance, None),
        ItemDefinition::builtin("dishwasher", "Dishwasher", 0.5, Appliance, None),
        ItemDefinition::builtin("microwave", "Microwave", 0.06, Appliance, None),
        ItemDefinition::builtin("kettle", "Kettle", 0.01, Appliance, None),
        ItemDefinition::builtin("tv_large", "Television (50\" and over)", 0.25, Electronics, Some(1.5)),
        ItemDefinition::builtin("tv_small", "Television (under 40\")", 0.1, Electronics, Some(0.8)),
        ItemDefinition::builtin("games_console", "Games console", 0.02, Electronics, None),
        ItemDefinition::builtin("desktop_computer", "Desktop computer", 0.08, Electronics, Some(0.6)),
        ItemDefinition::builtin("mirror_small", "Mirror (small)", 0.04, Decor, Some(0.5)),
        ItemDefinition::builtin("mirror_large", "Mirror (large)", 0.1, Decor, Some(1.0)),
        ItemDefinition::builtin("ornament", "Ornament", 0.05, Decor, Some(0.15)),
        ItemDefinition::builtin("framed_picture", "Framed picture", 0.03, Decor, Some(0.3)),
        ItemDefinition::builtin("table_lamp", "Table lamp", 0.04, Decor, Some(0.4)),
        ItemDefinition::builtin("rug", "Rug (rolled)", 0.3, Decor, None),
        ItemDefinition::builtin("plant_pot", "Plant pot", 0.05, Outdoor, None),
        ItemDefinition::builtin("bbq", "Barbecue", 0.6, Outdoor, None),
        ItemDefinition::builtin("lawnmower", "Lawnmower", 0.35, Outdoor, None),
        ItemDefinition::builtin("bicycle", "Bicycle", 0.8, Outdoor, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_internally_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), builtin_items().len());
        for item in catalog.iter() {
            assert!(item.validate().is_ok());
        }
    }

    #[test]
    fn builtin_table_resolves_known_slugs() {
        let catalog = Catalog::builtin();
        let sofa = catalog.resolve(&ItemId::new("sofa_3seater")).unwrap();
        assert_eq!(sofa.unit_volume_m3(), 3.2);
        assert!(!sofa.is_fragile());

        let ornament = catalog.resolve(&ItemId::new("ornament")).unwrap();
        assert_eq!(ornament.unit_volume_m3(), 0.05);
        assert_eq!(ornament.fragile_packing_ratio(), Some(0.15));
    }

    #[test]
    fn unknown_slug_does_not_resolve() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve(&ItemId::new("hot_tub")).is_none());
    }

    #[test]
    fn push_rejects_duplicate_ids() {
        let mut catalog = Catalog::new();
        let item = ItemDefinition::custom(ItemId::new("custom_a"), "Crate", 50.0, 50.0, 50.0)
            .unwrap();
        catalog.push(item.clone()).unwrap();

        let err = catalog.push(item).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn push_rejects_invalid_definitions() {
        let mut catalog = Catalog::new();
        let bad: ItemDefinition =
            serde_json::from_str(r#"{"id":"x","name":"X","unit_volume_m3":-1.0,"category":"custom"}"#)
                .unwrap();
        assert!(catalog.push(bad).is_err());
        assert!(catalog.is_empty());
    }
}
