use bounce_frames::consts::{IMAGE_HEIGHT, IMAGE_WIDTH, SIM_DT};
use bounce_frames::{
    BodyState, Scene, SequenceParams, SimError, draw_frame, generate_sequence,
    generate_sequence_in, simulate_motion, to_image_coords,
};
use glam::DVec2;
use proptest::prelude::*;

/// Starting centers whose collision box is clear of every wall capsule
fn interior() -> impl Strategy<Value = f64> {
    1.5..14.5f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn position_stays_in_box(
        speed in 0.0..10.0f64,
        direction in 0.0..std::f64::consts::TAU,
        x in interior(),
        y in interior(),
        gravity in 0.0..10.0f64,
        restitution in 0.0..=1.0f64,
    ) {
        // Long enough for several wall contacts at the faster speeds
        let params = SequenceParams::new(12, speed, direction, (x, y), gravity, restitution);
        let sequence = generate_sequence(&params).unwrap();

        let eps = 0.25;
        for position in sequence.positions() {
            prop_assert!(position.x >= -eps && position.x <= IMAGE_WIDTH + eps, "x = {}", position.x);
            prop_assert!(position.y >= -eps && position.y <= IMAGE_HEIGHT + eps, "y = {}", position.y);
        }
    }

    #[test]
    fn generation_is_deterministic(
        speed in 0.0..10.0f64,
        direction in 0.0..std::f64::consts::TAU,
        x in 0.0..16.0f64,
        y in 0.0..16.0f64,
        gravity in 5.0..10.0f64,
        restitution in 0.5..=1.0f64,
    ) {
        let params = SequenceParams::new(3, speed, direction, (x, y), gravity, restitution)
            .with_frame_rate(10);
        let first = generate_sequence(&params).unwrap();
        let second = generate_sequence(&params).unwrap();

        prop_assert_eq!(first.frames(), second.frames());
        prop_assert_eq!(first.positions(), second.positions());
    }

    #[test]
    fn rendered_square_matches_image_coords(
        x in 0u32..=12,
        y in 1u32..=13,
        side in 0u32..=3,
    ) {
        let scene = Scene::with_side_length(side as f64);
        let position = DVec2::new(x as f64, y as f64);
        let frame = draw_frame(&scene, to_image_coords(&scene, position));

        let (x, y, side) = (x as usize, y as usize, side as usize);
        let top = 16 - y - side;
        prop_assert_eq!(frame.bounding_box(), Some((x, top, x + side, top + side)));
        prop_assert_eq!(frame.black_count(), (side + 1) * (side + 1));
    }
}

#[test]
fn elastic_bounces_conserve_speed() {
    let scene = Scene::default();
    for velocity in [DVec2::new(5.0, 0.0), DVec2::new(0.0, -7.0)] {
        let mut state = BodyState::new(DVec2::new(8.0, 8.0), velocity);
        let mut bounces = 0;
        for _ in 0..1800 {
            let next = simulate_motion(&scene, state, 0.0, 1.0, SIM_DT);
            if next.velocity.dot(state.velocity) < 0.0 {
                bounces += 1;
            }
            state = next;
        }

        assert!(bounces >= 4, "only {} bounces", bounces);
        assert!((state.velocity.length() - velocity.length()).abs() < 1e-6);
    }
}

#[test]
fn inelastic_floor_contact_stops_the_fall() {
    let scene = Scene::default();
    let mut state = BodyState::new(DVec2::new(8.0, 6.0), DVec2::ZERO);
    let mut landed = false;

    for _ in 0..400 {
        state = simulate_motion(&scene, state, 9.8, 0.0, SIM_DT);
        // Contact starts once the unit collision box reaches the floor capsule
        if state.position.y <= 1.5 {
            landed = true;
        }
        if landed {
            assert!(state.velocity.y.abs() < 1e-9, "rebound: {:?}", state);
        }
    }
    assert!(landed);
}

#[test]
fn stationary_square_scenario() {
    let params = SequenceParams::new(1, 0.0, 0.0, (8.0, 8.0), 0.0, 1.0).with_frame_rate(1);
    let (frames, positions) = generate_sequence(&params).unwrap().into_parts();

    assert_eq!(positions, vec![DVec2::new(8.0, 8.0)]);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].width(), 16);
    assert_eq!(frames[0].height(), 16);
    assert_eq!(frames[0].bounding_box(), Some((8, 8, 8, 8)));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let params = SequenceParams::new(2, 1.0, f64::NAN, (8.0, 8.0), 9.8, 0.9);
    assert!(matches!(
        generate_sequence(&params),
        Err(SimError::NonFinite { name: "initial direction", .. })
    ));

    let scene = Scene {
        height: f64::INFINITY,
        ..Scene::default()
    };
    let params = SequenceParams::new(2, 1.0, 0.0, (8.0, 8.0), 9.8, 0.9);
    assert!(generate_sequence_in(&scene, &params).is_err());
}
