//! Vehicle class selection.

use serde::Serialize;

use haulplan_catalog::{VehicleClass, VehicleClasses};

/// The selected vehicle, plus whether the inventory outgrows even the
/// largest class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub vehicle: VehicleClass,
    /// Set when no class is adequate. The largest class is still returned so
    /// the caller always has a usable value to display.
    pub exceeds_capacity: bool,
}

/// Select the smallest class whose capacity meets or exceeds the total.
///
/// Deterministic and total: identical inputs always yield the same
/// recommendation, and an oversized inventory comes back flagged rather than
/// as an error.
pub fn recommend(classes: &VehicleClasses, total_m3: f64) -> Recommendation {
    match classes.smallest_adequate(total_m3) {
        Some(vehicle) => Recommendation {
            vehicle: vehicle.clone(),
            exceeds_capacity: false,
        },
        None => Recommendation {
            vehicle: classes.largest().clone(),
            exceeds_capacity: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_smallest_adequate_class() {
        let fleet = VehicleClasses::builtin();
        let picked = recommend(&fleet, 22.0);
        assert_eq!(picked.vehicle.capacity_m3, 35.0);
        assert!(!picked.exceeds_capacity);
    }

    #[test]
    fn exact_capacity_is_adequate() {
        let fleet = VehicleClasses::builtin();
        let picked = recommend(&fleet, 20.0);
        assert_eq!(picked.vehicle.capacity_m3, 20.0);
        assert!(!picked.exceeds_capacity);
    }

    #[test]
    fn oversized_inventory_returns_the_largest_class_flagged() {
        let fleet = VehicleClasses::builtin();
        let picked = recommend(&fleet, 90.0);
        assert_eq!(picked.vehicle.capacity_m3, 75.0);
        assert!(picked.exceeds_capacity);
    }

    #[test]
    fn empty_load_takes_the_smallest_class() {
        let fleet = VehicleClasses::builtin();
        let picked = recommend(&fleet, 0.0);
        assert_eq!(picked.vehicle.capacity_m3, 10.0);
        assert!(!picked.exceeds_capacity);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: increasing total volume never decreases the selected
            /// class's capacity.
            #[test]
            fn capacity_is_monotone_in_volume(volume in 0.0f64..100.0, extra in 0.0f64..100.0) {
                let fleet = VehicleClasses::builtin();
                let lower = recommend(&fleet, volume);
                let higher = recommend(&fleet, volume + extra);
                prop_assert!(higher.vehicle.capacity_m3 >= lower.vehicle.capacity_m3);
            }

            /// Property: the recommendation is always usable; a flag is
            /// raised exactly when the volume exceeds every class.
            #[test]
            fn always_returns_a_vehicle(volume in 0.0f64..200.0) {
                let fleet = VehicleClasses::builtin();
                let picked = recommend(&fleet, volume);
                prop_assert_eq!(picked.exceeds_capacity, volume > fleet.largest().capacity_m3);
                if !picked.exceeds_capacity {
                    prop_assert!(picked.vehicle.capacity_m3 >= volume);
                }
            }
        }
    }
}
