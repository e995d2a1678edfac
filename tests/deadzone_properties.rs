use bevy::math::Vec2;
use thumbstick_deadzones::deadzone::{radial, scaled_radial};
use thumbstick_deadzones::prelude::*;

fn assert_close(actual: Vec2, expected: Vec2) {
    let delta = (actual - expected).abs();
    assert!(
        delta.x <= 0.00001 && delta.y <= 0.00001,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn zero_input_never_moves() {
    for algorithm in DeadzoneAlgorithm::variants() {
        for deadzone in 0..=60 {
            let settings = DeadzoneSettings::new(algorithm, deadzone as f32 * 0.01);
            assert_eq!(transform(Vec2::ZERO, &settings), Vec2::ZERO);
        }
    }
}

#[test]
fn none_is_identity() {
    for x in -100..=100 {
        let x = x as f32 * 0.01;
        for y in -100..=100 {
            let y = y as f32 * 0.01;
            let value = Vec2::new(x, y);
            for deadzone in [0.0, 0.2, 0.6] {
                assert_eq!(DeadzoneAlgorithm::None.apply(value, deadzone), value);
            }
        }
    }
}

#[test]
fn axial_drops_small_axis() {
    let settings = DeadzoneSettings::new(DeadzoneAlgorithm::Axial, 0.2);
    assert_eq!(settings.transform(Vec2::new(0.1, 0.5)), Vec2::new(0.0, 0.5));
}

#[test]
fn radial_boundary_and_scaling() {
    let on_boundary = Vec2::new(0.3, 0.0);
    assert_eq!(radial(on_boundary, 0.3), Vec2::ZERO);
    assert_eq!(scaled_radial(on_boundary, 0.3), Vec2::ZERO);

    let outside = Vec2::new(0.5, 0.0);
    assert_eq!(radial(outside, 0.3), outside);

    let scaled = scaled_radial(outside, 0.3);
    assert!((scaled.length() - 0.2857143).abs() <= 0.00001);
    assert_close(scaled.normalize(), Vec2::X);
}

#[test]
fn scaled_radial_spans_live_zone() {
    for deadzone in [0.1, 0.2, 0.45, 0.6] {
        for angle in 0..36 {
            let direction = Vec2::from_angle(angle as f32 * 10.0_f32.to_radians());

            let inner = scaled_radial(direction * (deadzone + 0.00001), deadzone);
            assert!(inner.length() <= 0.0001);

            let outer = scaled_radial(direction * 0.99999, deadzone);
            assert!((outer.length() - 1.0).abs() <= 0.0001);
        }
    }
}

#[test]
fn every_algorithm_is_odd() {
    for algorithm in DeadzoneAlgorithm::variants() {
        for deadzone in [0.0, 0.17, 0.6] {
            for x in -20..=20 {
                let x = x as f32 * 0.05;
                for y in -20..=20 {
                    let y = y as f32 * 0.05;
                    let value = Vec2::new(x, y);
                    let negated = algorithm.apply(-value, deadzone);
                    assert_close(negated, -algorithm.apply(value, deadzone));
                }
            }
        }
    }
}

#[test]
fn curves_keep_direction_of_scaled_radial() {
    let deadzone = 0.2;
    for x in -20..=20 {
        let x = x as f32 * 0.05;
        for y in -20..=20 {
            let y = y as f32 * 0.05;
            let value = Vec2::new(x, y);
            if value.length() <= deadzone {
                continue;
            }

            let direction = scaled_radial(value, deadzone).normalize();
            for algorithm in [DeadzoneAlgorithm::Cubic, DeadzoneAlgorithm::CubicRoot] {
                assert_close(algorithm.apply(value, deadzone).normalize(), direction);
            }
        }
    }
}

#[test]
fn controller_saturates() {
    let last = DeadzoneAlgorithm::N_VARIANTS - 1;

    assert_eq!(adjust_deadzone(0.59, 0.05), 0.6);
    assert_eq!(adjust_deadzone(0.0, -0.05), 0.0);
    assert_eq!(select_algorithm(0, -1), 0);
    assert_eq!(select_algorithm(last, 1), last);
}

#[test]
fn controller_round_trips_inside_bounds() {
    for current in [0.05, 0.2, 0.33, 0.5] {
        for delta in [0.01, 0.03, 0.05] {
            let there = adjust_deadzone(current, delta);
            let back = adjust_deadzone(there, -delta);
            assert!((back - current).abs() <= 0.000001);
        }
    }
}

#[test]
fn unknown_selection_is_an_error() {
    assert!(DeadzoneAlgorithm::from_index(DeadzoneAlgorithm::N_VARIANTS).is_err());
    assert!(DeadzoneSettings::from_index(99, 0.2).is_err());
    assert!("Triangular".parse::<DeadzoneAlgorithm>().is_err());

    let error = DeadzoneAlgorithm::from_index(12).unwrap_err();
    assert_eq!(error.to_string(), "no deadzone algorithm at index 12");
}

#[test]
fn scaled_algorithms_are_continuous_at_the_boundary() {
    let deadzone = 0.3;
    let just_outside = Vec2::new(deadzone + 0.0001, 0.0);

    for algorithm in DeadzoneAlgorithm::variants() {
        // On a pure axis the sloped thresholds are zero, so there is no boundary to cross
        if matches!(
            algorithm,
            DeadzoneAlgorithm::SlopedAxial | DeadzoneAlgorithm::SlopedScaledAxial
        ) {
            continue;
        }

        let output = algorithm.apply(just_outside, deadzone);
        if algorithm.is_scaled() {
            // The cube root is continuous but very steep near zero
            assert!(output.length() <= deadzone / 2.0, "{algorithm}");
        } else {
            assert!(output.length() >= deadzone, "{algorithm}");
        }
    }
}

#[test]
fn heading_follows_processed_right_stick() {
    let settings = DeadzoneSettings::new(DeadzoneAlgorithm::ScaledRadial, 0.2);

    // Resting stick: keep the old heading
    let rest = settings.transform(Vec2::new(0.05, -0.05));
    assert_eq!(stick_heading(rest), Err(NearlySingularConversion));

    // Pushed up (negative y on screen)
    let up = settings.transform(Vec2::new(0.0, -0.8));
    assert_eq!(stick_heading(up), Ok(0.0));
}
