mod common;
use common::{drop_pellet, WorldBuilder};
use proptest::prelude::*;
use shoal_lib::model::clock::Clock;
use shoal_lib::model::seek::rate_limited_step;

prop_compose! {
    fn arb_pellet()(
        x_pct in 0.0f64..100.0,
        y in -50.0f64..450.0,
        velocity in 0.0f64..300.0
    ) -> (f64, f64, f64) {
        (x_pct, y, velocity)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_depths_stay_inside_clamp(
        baselines in prop::collection::vec(18.0f64..82.0, 1..6),
        pellets in prop::collection::vec(arb_pellet(), 0..12),
        dts in prop::collection::vec(0.0f64..0.2, 1..80)
    ) {
        let mut world = WorldBuilder::new().build();
        for (i, baseline) in baselines.iter().enumerate() {
            world.register_agent(i as u64 + 1, *baseline).unwrap();
        }
        for (x_pct, y, velocity) in pellets {
            drop_pellet(&mut world, x_pct, y, velocity);
        }

        for dt in dts {
            world.advance(dt).unwrap();
            for view in world.agents() {
                prop_assert!(
                    (5.0..=95.0).contains(&view.depth),
                    "Agent {} depth {} left the clamp", view.id, view.depth
                );
            }
        }
    }

    #[test]
    fn test_clock_delta_bounded(
        stamps in prop::collection::vec(-1.0e6f64..1.0e6, 1..50),
        max_dt in 0.001f64..1.0
    ) {
        let mut clock = Clock::new(max_dt);
        for now in stamps {
            let dt = clock.tick(now);
            prop_assert!(dt >= 0.0 && dt <= max_dt, "dt {} outside [0, {}]", dt, max_dt);
            prop_assert_eq!(clock.last(), Some(now));
        }
    }

    #[test]
    fn test_fall_distance_independent_of_frame_count(
        velocity in 0.0f64..300.0,
        total in 0.0f64..1.0,
        coarse in 1usize..10,
        fine in 10usize..60
    ) {
        let mut a = WorldBuilder::new().with_container(800.0, 100_000.0, 0.0).build();
        let mut b = WorldBuilder::new().with_container(800.0, 100_000.0, 0.0).build();
        drop_pellet(&mut a, 50.0, 0.0, velocity);
        drop_pellet(&mut b, 50.0, 0.0, velocity);

        for _ in 0..coarse {
            a.advance(total / coarse as f64).unwrap();
        }
        for _ in 0..fine {
            b.advance(total / fine as f64).unwrap();
        }

        let ya = a.falling_particles()[0].y;
        let yb = b.falling_particles()[0].y;
        prop_assert!((ya - yb).abs() < 1e-9, "{} vs {}", ya, yb);
        prop_assert!((ya - velocity * total).abs() < 1e-9);
    }

    #[test]
    fn test_rate_limited_step_never_overshoots(
        current in 0.0f64..100.0,
        target in 0.0f64..100.0,
        max_step in 0.0f64..20.0
    ) {
        let next = rate_limited_step(current, target, max_step);
        let (lo, hi) = if current <= target { (current, target) } else { (target, current) };
        prop_assert!(next >= lo - 1e-9 && next <= hi + 1e-9);
        prop_assert!((next - current).abs() <= max_step + 1e-12);
    }
}
