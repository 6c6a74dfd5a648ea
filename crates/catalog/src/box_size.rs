use serde::{Deserialize, Serialize};

use haulplan_core::{DomainError, DomainResult, ValueObject};

/// A packing box size the customer can choose per room.
///
/// A small fixed enumeration; "Medium" is the first entry and therefore the
/// default for new rooms and for the unassigned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    name: String,
    unit_volume_m3: f64,
}

impl BoxSize {
    /// Create a box size. The volume must be positive and finite.
    pub fn new(name: impl Into<String>, unit_volume_m3: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("box size name cannot be empty"));
        }
        let size = Self {
            name,
            unit_volume_m3,
        };
        size.validate()?;
        Ok(size)
    }

    /// Standard 0.19 m³ moving box.
    pub fn medium() -> Self {
        Self {
            name: "Medium".to_string(),
            unit_volume_m3: 0.19,
        }
    }

    /// Oversized 0.35 m³ moving box.
    pub fn large() -> Self {
        Self {
            name: "Large".to_string(),
            unit_volume_m3: 0.35,
        }
    }

    /// Every size offered to the customer, default first.
    pub fn all() -> Vec<BoxSize> {
        vec![Self::medium(), Self::large()]
    }

    /// Re-check the volume invariant.
    ///
    /// The built-in enumeration always passes; sizes arriving through
    /// deserialized snapshots bypass `new` and are re-checked here.
    pub fn validate(&self) -> DomainResult<()> {
        if self.unit_volume_m3.is_finite() && self.unit_volume_m3 > 0.0 {
            Ok(())
        } else {
            Err(DomainError::invalid_box_size(format!(
                "{}: volume must be positive, got {}",
                self.name, self.unit_volume_m3
            )))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_volume_m3(&self) -> f64 {
        self.unit_volume_m3
    }
}

impl Default for BoxSize {
    /// The first size in the enumeration.
    fn default() -> Self {
        Self::medium()
    }
}

impl ValueObject for BoxSize {}
