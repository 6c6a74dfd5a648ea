use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use haulplan_catalog::{Catalog, VehicleClasses};
use haulplan_core::ItemId;
use haulplan_estimation::Estimator;
use haulplan_inventory::Inventory;

/// Build an inventory with `rooms` populated rooms plus a handful of
/// unassigned items, spanning furniture, boxable and fragile entries.
fn build_inventory(catalog: &Catalog, rooms: usize) -> Inventory {
    let spread = [
        ("sofa_3seater", 1u32),
        ("bed_double", 1),
        ("wardrobe_double", 2),
        ("kettle", 1),
        ("microwave", 1),
        ("ornament", 6),
        ("mirror_small", 2),
        ("framed_picture", 4),
    ];

    let mut inventory = Inventory::empty();
    for index in 0..rooms {
        let room = inventory.add_room(format!("Room {index}")).unwrap();
        for (slug, quantity) in spread {
            inventory
                .add_item_to_room(catalog, room, &ItemId::new(slug), quantity)
                .unwrap();
        }
    }
    for (slug, quantity) in [("bicycle", 2u32), ("table_lamp", 3), ("rug", 1)] {
        inventory
            .add_unassigned_item(catalog, &ItemId::new(slug), quantity)
            .unwrap();
    }
    inventory
}

fn bench_projection(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let vehicles = VehicleClasses::builtin();
    let estimator = Estimator::new(&catalog, &vehicles);

    let mut group = c.benchmark_group("projection");
    for rooms in [1usize, 10, 50] {
        let inventory = build_inventory(&catalog, rooms);
        group.throughput(Throughput::Elements(rooms as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(rooms),
            &inventory,
            |bencher, inventory| {
                bencher.iter(|| estimator.project(black_box(inventory)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
