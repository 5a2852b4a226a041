use proptest::prelude::*;

use disk_ccd::Vec2;
use disk_ccd::sim::{Color, CollisionEvent, DiskId, Simulation, resolve};

const BOX: f64 = 400.0;

type DiskSpec = (f64, f64, f64, f64, f64);

fn disk_spec() -> impl Strategy<Value = DiskSpec> {
    (
        20.0..BOX - 20.0,
        20.0..BOX - 20.0,
        -100.0..100.0f64,
        -100.0..100.0f64,
        5.0..20.0f64,
    )
}

/// Spawn candidates greedily, skipping any that would overlap or leave the box.
///
/// `margin` is the minimum clearance kept from walls and other disks.
fn build(specs: &[DiskSpec], margin: f64) -> Simulation {
    let mut sim = Simulation::with_bounds(BOX, BOX);
    for &(x, y, vx, vy, r) in specs {
        let pos = Vec2::new(x, y);
        if !sim.bounds.contains_disk(pos, r + margin, 0.0) {
            continue;
        }
        let clear = sim
            .disks()
            .iter()
            .all(|d| (d.position - pos).length() > d.radius() + r + margin);
        if clear {
            sim.spawn_disk(pos, Vec2::new(vx, vy), r, Color::default());
        }
    }
    sim
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn disks_never_interpenetrate_or_escape(
        specs in prop::collection::vec(disk_spec(), 2..12),
        dt in 0.01..0.5f64,
    ) {
        let mut sim = build(&specs, 0.0);
        for _ in 0..10 {
            sim.step(dt);
            if let Some(gap) = sim.min_gap() {
                prop_assert!(gap >= -1e-6, "overlap {gap}");
            }
            prop_assert!(sim.is_contained(1e-6));
        }
    }

    #[test]
    fn step_covers_exactly_dt(
        specs in prop::collection::vec(disk_spec(), 1..12),
        dt in 0.0..2.0f64,
    ) {
        let mut sim = build(&specs, 0.0);
        let report = sim.step(dt);
        prop_assert!((report.advanced - dt).abs() <= 1e-9 * dt.max(1.0));
        prop_assert!((sim.time - dt).abs() <= 1e-12);
        prop_assert_eq!(report.events, report.pair_events + report.boundary_events);
    }

    #[test]
    fn steps_conserve_energy(
        specs in prop::collection::vec(disk_spec(), 1..12),
        dt in 0.1..1.0f64,
    ) {
        let mut sim = build(&specs, 0.0);
        let e0 = sim.kinetic_energy();
        prop_assume!(e0 > 1e-6);
        for _ in 0..5 {
            sim.step(dt);
        }
        prop_assert!(((sim.kinetic_energy() - e0) / e0).abs() < 1e-9);
    }

    #[test]
    fn zero_dt_leaves_state_untouched(
        specs in prop::collection::vec(disk_spec(), 1..12),
    ) {
        // Clearance keeps every event strictly in the future
        let mut sim = build(&specs, 1e-3);
        let before = sim.render_view();
        let velocities: Vec<Vec2> = sim.disks().iter().map(|d| d.velocity).collect();

        let report = sim.step(0.0);
        prop_assert_eq!(report.events, 0);
        prop_assert_eq!(sim.render_view(), before);
        for (d, v) in sim.disks().iter().zip(&velocities) {
            prop_assert_eq!(d.velocity, *v);
        }
    }

    #[test]
    fn pair_resolution_conserves_momentum_and_energy(
        a in disk_spec(),
        b in disk_spec(),
    ) {
        let mut sim = Simulation::with_bounds(BOX, BOX);
        sim.spawn_disk(Vec2::new(a.0, a.1), Vec2::new(a.2, a.3), a.4, Color::default());
        sim.spawn_disk(Vec2::new(b.0, b.1), Vec2::new(b.2, b.3), b.4, Color::default());
        prop_assume!((sim.disk(DiskId(0)).position - sim.disk(DiskId(1)).position).length() > 1e-3);

        let p0 = sim.momentum();
        let e0 = sim.kinetic_energy();
        let mut disks = sim.disks().to_vec();
        resolve(&mut disks, &CollisionEvent::DiskPair { a: DiskId(0), b: DiskId(1), time: 0.0 });

        let p1: Vec2 = disks.iter().map(|d| d.momentum()).sum();
        let e1: f64 = disks.iter().map(|d| d.kinetic_energy()).sum();
        let scale = disks.iter().map(|d| d.mass() * 200.0).sum::<f64>();
        prop_assert!((p1 - p0).length() <= 1e-9 * scale);
        prop_assert!((e1 - e0).abs() <= 1e-9 * e0.max(1.0));
    }
}
