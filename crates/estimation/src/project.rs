//! Result projection: assembling the read-only estimation summary.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use haulplan_catalog::{BoxSize, Catalog, VehicleClasses};
use haulplan_core::{DomainResult, Entity, ItemId, RoomId};
use haulplan_inventory::Inventory;

use crate::packing::{BoxCounts, section_boxes};
use crate::recommend::{Recommendation, recommend};
use crate::resolve::ItemResolver;
use crate::volume::section_volume;

/// One item row in a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBreakdown {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_volume_m3: f64,
    pub subtotal_m3: f64,
    pub fragile: bool,
}

/// Derived numbers for one room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomBreakdown {
    pub room_id: RoomId,
    pub name: String,
    pub box_size: BoxSize,
    pub items: Vec<ItemBreakdown>,
    pub furniture_volume_m3: f64,
    pub regular_box_count: u32,
    pub fragile_box_count: u32,
    pub box_volume_m3: f64,
    pub total_volume_m3: f64,
}

/// Derived numbers for the unassigned list, packed at the default box size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBreakdown {
    pub box_size: BoxSize,
    pub items: Vec<ItemBreakdown>,
    pub furniture_volume_m3: f64,
    pub regular_box_count: u32,
    pub fragile_box_count: u32,
    pub box_volume_m3: f64,
    pub total_volume_m3: f64,
}

/// Non-fatal condition surfaced alongside the totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A stored reference no longer resolves; it contributed zero volume.
    OrphanedItem {
        item_id: ItemId,
        room_id: Option<RoomId>,
    },
    /// Even the largest vehicle class is too small for this inventory.
    ExceedsLargestVehicle {
        total_volume_m3: f64,
        largest_capacity_m3: f64,
    },
}

/// The full derived summary handed to display/persistence collaborators.
///
/// Never stored and never mutated in place: each projection rebuilds it from
/// the inventory state it is given, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub furniture_volume_m3: f64,
    pub box_volume_m3: f64,
    pub total_volume_m3: f64,
    pub regular_box_count: u32,
    pub fragile_box_count: u32,
    pub total_box_count: u32,
    pub recommendation: Recommendation,
    pub rooms: Vec<RoomBreakdown>,
    pub unassigned: SectionBreakdown,
    pub warnings: Vec<Warning>,
}

/// Projects inventory state into an [`EstimationResult`].
///
/// Borrows the static tables and never mutates the inventory. Intended
/// usage: the caller applies a mutation, projects, renders.
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    catalog: &'a Catalog,
    vehicles: &'a VehicleClasses,
    default_box: BoxSize,
}

/// Intermediate per-section numbers shared by rooms and the unassigned list.
struct SectionTotals {
    items: Vec<ItemBreakdown>,
    furniture_m3: f64,
    boxes: BoxCounts,
    box_m3: f64,
}

impl<'a> Estimator<'a> {
    pub fn new(catalog: &'a Catalog, vehicles: &'a VehicleClasses) -> Self {
        Self {
            catalog,
            vehicles,
            default_box: BoxSize::default(),
        }
    }

    /// Pack unassigned items at a different box size.
    pub fn with_default_box(mut self, box_size: BoxSize) -> Self {
        self.default_box = box_size;
        self
    }

    /// Run the full pipeline over the current inventory state.
    ///
    /// The only error path is the defensive box-volume guard, which cannot
    /// trigger for inventories built through the mutation API.
    pub fn project(&self, inventory: &Inventory) -> DomainResult<EstimationResult> {
        let resolver = ItemResolver::new(self.catalog, inventory);

        let mut warnings = Vec::new();
        let mut rooms = Vec::with_capacity(inventory.rooms().len());
        let mut furniture_m3 = 0.0;
        let mut box_m3 = 0.0;
        let mut boxes = BoxCounts::default();

        for room in inventory.rooms() {
            let totals = build_section(
                room.item_counts(),
                room.box_size(),
                &resolver,
                Some(*room.id()),
                &mut warnings,
            )?;
            furniture_m3 += totals.furniture_m3;
            box_m3 += totals.box_m3;
            boxes.regular += totals.boxes.regular;
            boxes.fragile += totals.boxes.fragile;
            rooms.push(RoomBreakdown {
                room_id: *room.id(),
                name: room.name().to_string(),
                box_size: room.box_size().clone(),
                items: totals.items,
                furniture_volume_m3: totals.furniture_m3,
                regular_box_count: totals.boxes.regular,
                fragile_box_count: totals.boxes.fragile,
                box_volume_m3: totals.box_m3,
                total_volume_m3: totals.furniture_m3 + totals.box_m3,
            });
        }

        let totals = build_section(
            inventory.unassigned(),
            &self.default_box,
            &resolver,
            None,
            &mut warnings,
        )?;
        furniture_m3 += totals.furniture_m3;
        box_m3 += totals.box_m3;
        boxes.regular += totals.boxes.regular;
        boxes.fragile += totals.boxes.fragile;
        let unassigned = SectionBreakdown {
            box_size: self.default_box.clone(),
            items: totals.items,
            furniture_volume_m3: totals.furniture_m3,
            regular_box_count: totals.boxes.regular,
            fragile_box_count: totals.boxes.fragile,
            box_volume_m3: totals.box_m3,
            total_volume_m3: totals.furniture_m3 + totals.box_m3,
        };

        let total_m3 = furniture_m3 + box_m3;
        let recommendation = recommend(self.vehicles, total_m3);
        if recommendation.exceeds_capacity {
            warnings.push(Warning::ExceedsLargestVehicle {
                total_volume_m3: total_m3,
                largest_capacity_m3: recommendation.vehicle.capacity_m3,
            });
        }

        debug!(
            furniture_m3,
            box_m3,
            total_m3,
            vehicle = %recommendation.vehicle.name,
            warnings = warnings.len(),
            "projected estimation result"
        );

        Ok(EstimationResult {
            furniture_volume_m3: furniture_m3,
            box_volume_m3: box_m3,
            total_volume_m3: total_m3,
            regular_box_count: boxes.regular,
            fragile_box_count: boxes.fragile,
            total_box_count: boxes.total(),
            recommendation,
            rooms,
            unassigned,
            warnings,
        })
    }
}

fn build_section(
    counts: &BTreeMap<ItemId, u32>,
    box_size: &BoxSize,
    resolver: &ItemResolver<'_>,
    room_id: Option<RoomId>,
    warnings: &mut Vec<Warning>,
) -> DomainResult<SectionTotals> {
    let volume = section_volume(counts, resolver);
    let boxes = section_boxes(counts, box_size, resolver)?;

    for item_id in volume.orphans {
        warnings.push(Warning::OrphanedItem { item_id, room_id });
    }

    let items = volume
        .items
        .into_iter()
        .map(|entry| ItemBreakdown {
            item_id: entry.definition.id().clone(),
            name: entry.definition.name().to_string(),
            quantity: entry.quantity,
            unit_volume_m3: entry.definition.unit_volume_m3(),
            subtotal_m3: entry.subtotal_m3,
            fragile: entry.definition.is_fragile(),
        })
        .collect();

    Ok(SectionTotals {
        items,
        furniture_m3: volume.volume_m3,
        boxes,
        box_m3: boxes.volume_m3(box_size),
    })
}
