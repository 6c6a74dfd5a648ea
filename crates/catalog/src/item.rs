use serde::{Deserialize, Serialize};

use haulplan_core::{DomainError, DomainResult, ItemId, ValueObject};

/// Conversion factor for custom item dimensions entered in centimetres.
const CM3_PER_M3: f64 = 1_000_000.0;

/// Broad furniture category, used by display collaborators for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Seating,
    Table,
    Bed,
    Storage,
    Appliance,
    Electronics,
    Decor,
    Outdoor,
    Custom,
}

/// An item the customer can place in a room or on the unassigned list.
///
/// Immutable once created. User-defined items behave identically to built-in
/// catalog entries once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    id: ItemId,
    name: String,
    unit_volume_m3: f64,
    category: ItemCategory,
    /// Packing-box equivalents at the 0.14 m³ reference box. `Some` exactly
    /// when the item needs protective (fragile) packing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fragile_packing_ratio: Option<f64>,
}

impl ItemDefinition {
    /// Create a non-fragile item definition.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        unit_volume_m3: f64,
        category: ItemCategory,
    ) -> DomainResult<Self> {
        let item = Self {
            id,
            name: name.into(),
            unit_volume_m3,
            category,
            fragile_packing_ratio: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Create a fragile item definition.
    ///
    /// `packing_ratio` is the number of reference boxes one unit occupies
    /// once protectively packed.
    pub fn fragile(
        id: ItemId,
        name: impl Into<String>,
        unit_volume_m3: f64,
        category: ItemCategory,
        packing_ratio: f64,
    ) -> DomainResult<Self> {
        let item = Self {
            id,
            name: name.into(),
            unit_volume_m3,
            category,
            fragile_packing_ratio: Some(packing_ratio),
        };
        item.validate()?;
        Ok(item)
    }

    /// Create a user-defined item from centimetre dimensions.
    ///
    /// The unit volume is `length * width * height` converted to cubic
    /// metres. Non-positive or non-finite dimensions and empty names are
    /// rejected without creating anything.
    pub fn custom(
        id: ItemId,
        name: impl Into<String>,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_dimensions("name cannot be empty"));
        }
        for (label, value) in [
            ("length", length_cm),
            ("width", width_cm),
            ("height", height_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::invalid_dimensions(format!(
                    "{label} must be a positive number of centimetres, got {value}"
                )));
            }
        }

        Ok(Self {
            id,
            name,
            unit_volume_m3: (length_cm * width_cm * height_cm) / CM3_PER_M3,
            category: ItemCategory::Custom,
            fragile_packing_ratio: None,
        })
    }

    /// Construct a statically-known-valid definition for the built-in table.
    pub(crate) fn builtin(
        id: &str,
        name: &str,
        unit_volume_m3: f64,
        category: ItemCategory,
        fragile_packing_ratio: Option<f64>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            unit_volume_m3,
            category,
            fragile_packing_ratio,
        }
    }

    /// Re-check the construction invariants.
    ///
    /// Definitions arriving through deserialized snapshots bypass the
    /// constructors, so registries re-validate before accepting them.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("item id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if !self.unit_volume_m3.is_finite() || self.unit_volume_m3 <= 0.0 {
            return Err(DomainError::validation(format!(
                "unit volume must be positive, got {}",
                self.unit_volume_m3
            )));
        }
        if let Some(ratio) = self.fragile_packing_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(DomainError::validation(format!(
                    "fragile packing ratio must be positive, got {ratio}"
                )));
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_volume_m3(&self) -> f64 {
        self.unit_volume_m3
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn is_fragile(&self) -> bool {
        self.fragile_packing_ratio.is_some()
    }

    pub fn fragile_packing_ratio(&self) -> Option<f64> {
        self.fragile_packing_ratio
    }
}

impl ValueObject for ItemDefinition {}
