//! End-to-end scenarios driven through a `Session` with host key names.

use drift_common::{Axis, DirectionSign, RampDirection};
use drift_kernel::{Easing, GameConfig, SHIP_START, Session};

const DT: f32 = 0.1;

fn session() -> Session {
    Session::new(&GameConfig::default()).expect("default config is valid")
}

fn run(s: &mut Session, ticks: usize) {
    for _ in 0..ticks {
        s.tick(DT);
    }
}

#[test]
fn forward_one_second_covers_eased_distance() {
    let mut s = session();
    s.push_host("w", true);
    run(&mut s, 10);

    let p = s.ship_position().unwrap();
    let travelled = SHIP_START.z - p.z;
    assert!(travelled > 0.0 && travelled < 20.0);
    assert!((travelled - 11.0).abs() < 1e-3, "travelled {travelled}");
    assert_eq!(s.controller().acceleration(Axis::Forward), 1.0);
    assert_eq!(p.x, SHIP_START.x);
}

#[test]
fn holding_right_then_tapping_left_keeps_going_left() {
    let mut s = session();
    s.push_host("d", true);
    run(&mut s, 5);
    s.push_host("a", true);
    run(&mut s, 1);
    s.push_host("d", false);
    run(&mut s, 1);

    let lat = s.input().axis(Axis::Lateral);
    assert_eq!(lat.sign, DirectionSign::Negative);
    assert_eq!(lat.ramp, RampDirection::Accelerating);
    assert!(s.controller().last_velocity().x < 0.0);
    assert!((s.controller().ramp(Axis::Lateral) - 0.7).abs() < 1e-5);
}

#[test]
fn reversal_mid_ramp_flips_without_reset() {
    let mut s = session();
    s.push_host("ArrowLeft", true);
    run(&mut s, 3);
    let x_after_left = s.ship_position().unwrap().x;
    assert!(x_after_left < SHIP_START.x);

    s.push_host("ArrowRight", true);
    s.tick(DT);

    let ease = |x: f32| Easing::InOutSine.apply(x);
    let dx = s.ship_position().unwrap().x - x_after_left;
    assert!((dx - ease(0.4) * 20.0 * DT).abs() < 1e-4, "dx {dx}");
}

#[test]
fn release_coasts_to_a_stop() {
    let mut s = session();
    s.push_host("s", true);
    run(&mut s, 10);
    s.push_host("s", false);
    run(&mut s, 10);

    let stopped_at = s.ship_position().unwrap();
    run(&mut s, 10);
    assert_eq!(s.ship_position().unwrap(), stopped_at);
    assert_eq!(s.controller().ramp(Axis::Forward), 0.0);
    // 11 units ramping up (ease at 0.1 ..= 1.0) plus 9 coasting down (0.9 ..= 0.0).
    assert!((stopped_at.z - SHIP_START.z - 20.0).abs() < 1e-3);
}

#[test]
fn diagonal_moves_on_both_axes() {
    let mut s = session();
    s.push_host("w", true);
    s.push_host("d", true);
    run(&mut s, 10);
    let p = s.ship_position().unwrap();
    assert!((p.x - SHIP_START.x - 11.0).abs() < 1e-3);
    assert!((SHIP_START.z - p.z - 11.0).abs() < 1e-3);
}

#[test]
fn config_overrides_flow_into_session() {
    let config = GameConfig::from_json_str(
        r#"{
            "motion": { "speed": 10.0, "ramp_rate": 2.0, "easing": "linear" },
            "bindings": { "k": "backward" }
        }"#,
    )
    .unwrap();
    let mut s = Session::new(&config).unwrap();
    s.push_host("k", true);
    run(&mut s, 5);

    // Linear ramp 0.2 .. 1.0 at speed 10: (0.2+0.4+0.6+0.8+1.0) * 10 * 0.1.
    let p = s.ship_position().unwrap();
    assert!((p.z - 3.0).abs() < 1e-4, "z {}", p.z);
}

#[test]
fn same_inputs_same_trajectory() {
    let script = |s: &mut Session| {
        s.push_host("w", true);
        run(s, 4);
        s.push_host("a", true);
        run(s, 3);
        s.push_host("w", false);
        run(s, 6);
    };
    let mut a = session();
    let mut b = session();
    script(&mut a);
    script(&mut b);
    assert_eq!(a.ship_position(), b.ship_position());
    assert_eq!(a.spawner().spawned(), b.spawner().spawned());
}
