//! Scaler round-trip and extrapolation properties.

use rasteroids::scene::Scaler;

const CONFIGS: [(f64, f64, f64, f64); 6] = [
    (0.0, 10.0, 0.0, 100.0),
    (-10.0, 10.0, 50.0, 1750.0),
    (-1.0, 1.0, 950.0, 50.0),
    (3.0, -7.0, 0.0, 1.0),
    (0.25, 0.75, -4.0, 4.0),
    (1e6, 2e6, -1.0, 1.0),
];

#[test]
fn invert_undoes_scale_across_the_input_range() {
    for (in_min, in_max, out_min, out_max) in CONFIGS {
        let s = Scaler::new(in_min, in_max, out_min, out_max);
        for step in 0..=100 {
            let x = in_min + (in_max - in_min) * (step as f64 / 100.0);
            let roundtrip = s.invert(s.scale(x));
            assert!(
                (roundtrip - x).abs() <= 1e-9 * x.abs().max(1.0),
                "roundtrip({x}) = {roundtrip} for {s:?}"
            );
        }
    }
}

#[test]
fn invert_undoes_scale_outside_the_input_range() {
    let s = Scaler::new(0.0, 10.0, 100.0, 200.0);
    for x in [-25.0, -0.5, 10.5, 400.0] {
        assert!((s.invert(s.scale(x)) - x).abs() < 1e-9);
    }
}

#[test]
fn degenerate_output_range_is_a_constant_mapping() {
    let s = Scaler::new(0.0, 10.0, 7.0, 7.0);
    assert_eq!(s.scale(0.0), 7.0);
    assert_eq!(s.scale(3.0), 7.0);
    assert_eq!(s.scale(10.0), 7.0);
}

#[test]
fn graph_scene_scalers_agree_with_each_other() {
    // The graph scene builds a screen->value mapping and asks for the
    // screen position of value 0 via invert.
    let x_map = Scaler::new(50.0, 1750.0, -10.0, 10.0);
    let x0 = x_map.invert(0.0);
    assert!((x0 - 900.0).abs() < 1e-9);
    assert!((x_map.scale(x0)).abs() < 1e-9);
}
