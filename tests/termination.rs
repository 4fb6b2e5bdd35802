mod common;
use common::{drop_pellet, WorldBuilder};
use shoal_lib::model::state::{BoundingBox, SimEvent};

#[test]
fn test_pellet_removed_within_bound() {
    // floor_y = 400, size 6, no agents
    let mut world = WorldBuilder::new().with_container(800.0, 400.0, 0.0).build();
    let id = drop_pellet(&mut world, 50.0, -8.0, 140.0);

    let bound = ((400.0 - 6.0 - (-8.0)) / 140.0_f64).ceil() as usize;
    assert_eq!(bound, 3);

    let mut removed_at = None;
    for step in 1..=bound {
        let events = world.advance(1.0).unwrap();
        if events.contains(&SimEvent::ParticleSettled { particle_id: id }) {
            removed_at = Some(step);
            break;
        }
    }
    assert!(removed_at.is_some(), "Pellet survived {bound} steps");
    assert_pellet_gone!(world, id);

    for _ in 0..10 {
        let events = world.advance(1.0).unwrap();
        assert!(events.iter().all(|e| e.particle_id() != id));
        assert_pellet_gone!(world, id);
    }
    assert_eq!(world.metrics.settled(), 1);
}

#[test]
fn test_pellet_survives_until_floor() {
    let mut world = WorldBuilder::new().with_container(800.0, 400.0, 0.0).build();
    let id = drop_pellet(&mut world, 50.0, -8.0, 140.0);

    world.advance(1.0).unwrap();
    world.advance(1.0).unwrap();
    assert_eq!(world.falling_particles().len(), 1);
    assert_close!(world.falling_particles()[0].y, 272.0, 1e-9);

    let events = world.advance(1.0).unwrap();
    assert_eq!(events, vec![SimEvent::ParticleSettled { particle_id: id }]);
}

#[test]
fn test_gravel_raises_floor() {
    // floor_y = 360, so a pellet at 350 settles on its next move
    let mut world = WorldBuilder::new().with_container(800.0, 400.0, 40.0).build();
    let id = drop_pellet(&mut world, 50.0, 350.0, 100.0);
    let events = world.advance(0.1).unwrap();
    assert_eq!(events, vec![SimEvent::ParticleSettled { particle_id: id }]);
}

#[test]
fn test_collision_precedence_over_floor() {
    let mut world = WorldBuilder::new()
        .with_container(800.0, 400.0, 0.0)
        .with_agent(7, 50.0)
        .build();
    // Lands exactly on floor_y - size = 394 and inside the agent box.
    let id = drop_pellet(&mut world, 50.0, 384.0, 10.0);
    world
        .update_agent_box(7, BoundingBox::new(380.0, 380.0, 420.0, 400.0))
        .unwrap();

    let events = world.advance(1.0).unwrap();
    assert_eq!(
        events,
        vec![SimEvent::ParticleEaten {
            particle_id: id,
            agent_id: 7
        }]
    );
    assert_pellet_gone!(world, id);
    assert_eq!(world.metrics.eaten(), 1);
    assert_eq!(world.metrics.settled(), 0);
}

#[test]
fn test_collision_uses_pre_step_boxes_only() {
    let mut world = WorldBuilder::new()
        .with_container(800.0, 400.0, 40.0)
        .with_agent(1, 50.0)
        .with_agent(2, 50.0)
        .build();
    let a = drop_pellet(&mut world, 25.0, 100.0, 100.0);
    let b = drop_pellet(&mut world, 75.0, 100.0, 100.0);

    // Only the box over column 25% (x = 200 px) is supplied.
    world
        .update_agent_box(2, BoundingBox::new(180.0, 150.0, 220.0, 250.0))
        .unwrap();
    let events = world.advance(1.0).unwrap();

    assert_eq!(
        events,
        vec![SimEvent::ParticleEaten {
            particle_id: a,
            agent_id: 2
        }]
    );
    assert_eq!(world.falling_particles().len(), 1);
    assert_eq!(world.falling_particles()[0].id, b);
}

#[test]
fn test_bubbles_surface_and_are_counted() {
    let mut world = WorldBuilder::new().build();
    let mut request = world.rising_request(4, 100.0);
    request.start_jitter = 0.0;
    let ids = world.spawn_rising(&request).unwrap();

    // Slowest bubble needs (100 + 14) / 120 s to clear the top.
    let mut surfaced = Vec::new();
    for _ in 0..100 {
        for event in world.advance(0.05).unwrap() {
            if let SimEvent::BubbleSurfaced { particle_id } = event {
                surfaced.push(particle_id);
            }
        }
    }
    surfaced.sort_unstable();
    assert_eq!(surfaced, ids);
    assert!(world.rising_particles().is_empty());
    assert_eq!(world.metrics.surfaced(), 4);
}
