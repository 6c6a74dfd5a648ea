use serde::{Deserialize, Serialize};

use haulplan_core::{DomainError, DomainResult, ValueObject};

/// A vehicle class offered by the moving company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClass {
    pub name: String,
    pub capacity_m3: f64,
    pub description: String,
    pub price_range: String,
}

impl VehicleClass {
    pub fn new(
        name: impl Into<String>,
        capacity_m3: f64,
        description: impl Into<String>,
        price_range: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            capacity_m3,
            description: description.into(),
            price_range: price_range.into(),
        }
    }
}

impl ValueObject for VehicleClass {}

/// The ordered vehicle class list.
///
/// Construction guarantees a non-empty list with positive capacities in
/// strictly ascending order, so "first adequate class" and "largest class"
/// are always well-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VehicleClass>", into = "Vec<VehicleClass>")]
pub struct VehicleClasses(Vec<VehicleClass>);

impl VehicleClasses {
    pub fn new(classes: Vec<VehicleClass>) -> DomainResult<Self> {
        if classes.is_empty() {
            return Err(DomainError::validation("vehicle class list cannot be empty"));
        }
        for class in &classes {
            if !class.capacity_m3.is_finite() || class.capacity_m3 <= 0.0 {
                return Err(DomainError::validation(format!(
                    "{}: capacity must be positive, got {}",
                    class.name, class.capacity_m3
                )));
            }
        }
        for pair in classes.windows(2) {
            if pair[1].capacity_m3 <= pair[0].capacity_m3 {
                return Err(DomainError::validation(format!(
                    "vehicle classes must be strictly ascending by capacity ({} before {})",
                    pair[0].name, pair[1].name
                )));
            }
        }
        Ok(Self(classes))
    }

    /// The fleet offered to customers, smallest first.
    pub fn builtin() -> Self {
        Self(vec![
            VehicleClass::new(
                "Small Van",
                10.0,
                "Short-wheelbase van for a studio flat or a few boxes.",
                "£150-£250",
            ),
            VehicleClass::new(
                "Medium Van",
                20.0,
                "Long-wheelbase van for a one-bedroom flat.",
                "£250-£400",
            ),
            VehicleClass::new(
                "Luton Van",
                35.0,
                "Box van with tail lift for a two to three bedroom home.",
                "£400-£600",
            ),
            VehicleClass::new(
                "7.5t Lorry",
                50.0,
                "Small lorry for a three to four bedroom house.",
                "£600-£900",
            ),
            VehicleClass::new(
                "18t Lorry",
                75.0,
                "Full-size removals lorry for a large house move.",
                "£900-£1400",
            ),
        ])
    }

    /// The first class whose capacity meets or exceeds the given volume.
    pub fn smallest_adequate(&self, total_m3: f64) -> Option<&VehicleClass> {
        self.0.iter().find(|class| class.capacity_m3 >= total_m3)
    }

    /// The largest class in the list.
    pub fn largest(&self) -> &VehicleClass {
        // Non-empty by construction (`new` rejects empty lists).
        &self.0[self.0.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleClass> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<VehicleClass>> for VehicleClasses {
    type Error = DomainError;

    fn try_from(classes: Vec<VehicleClass>) -> Result<Self, Self::Error> {
        Self::new(classes)
    }
}

impl From<VehicleClasses> for Vec<VehicleClass> {
    fn from(classes: VehicleClasses) -> Self {
        classes.0
    }
}
