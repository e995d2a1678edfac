use bevy::ecs::world::World;
use bevy::math::Vec2;
use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};
use thumbstick_deadzones::prelude::*;

#[test]
fn algorithm_serializes_as_variant_name() {
    assert_tokens(
        &DeadzoneAlgorithm::SlopedScaledAxial,
        &[Token::UnitVariant {
            name: "DeadzoneAlgorithm",
            variant: "SlopedScaledAxial",
        }],
    );
}

#[test]
fn settings_serialize() {
    let settings = DeadzoneSettings::new(DeadzoneAlgorithm::Cubic, 0.5);

    assert_tokens(
        &settings,
        &[
            Token::Struct {
                name: "DeadzoneSettings",
                len: 3,
            },
            Token::Str("algorithm"),
            Token::UnitVariant {
                name: "DeadzoneAlgorithm",
                variant: "Cubic",
            },
            Token::Str("deadzone"),
            Token::F32(0.5),
            Token::Str("bounds"),
            Token::Struct {
                name: "DeadzoneBounds",
                len: 3,
            },
            Token::Str("min"),
            Token::F32(0.0),
            Token::Str("max"),
            Token::F32(0.6),
            Token::Str("step"),
            Token::F32(0.01),
            Token::StructEnd,
            Token::StructEnd,
        ],
    );
}

#[test]
fn settings_without_bounds_use_defaults() {
    let settings = DeadzoneSettings::new(DeadzoneAlgorithm::Hybrid, 0.17);

    assert_de_tokens(
        &settings,
        &[
            Token::Struct {
                name: "DeadzoneSettings",
                len: 2,
            },
            Token::Str("algorithm"),
            Token::UnitVariant {
                name: "DeadzoneAlgorithm",
                variant: "Hybrid",
            },
            Token::Str("deadzone"),
            Token::F32(0.17),
            Token::StructEnd,
        ],
    );
}

#[test]
fn loaded_deadzone_is_clamped_into_bounds() {
    let tokens = [
        Token::Struct {
            name: "DeadzoneSettings",
            len: 2,
        },
        Token::Str("algorithm"),
        Token::UnitVariant {
            name: "DeadzoneAlgorithm",
            variant: "ScaledRadial",
        },
        Token::Str("deadzone"),
        Token::F32(1.0),
        Token::StructEnd,
    ];

    let settings = DeadzoneSettings::new(DeadzoneAlgorithm::ScaledRadial, 0.6);
    assert_de_tokens(&settings, &tokens);

    let output = settings.transform(Vec2::X);
    assert!(output.is_finite());
    assert!((output.length() - 1.0).abs() <= 0.0001);
}

#[test]
fn loaded_nan_deadzone_falls_back_to_lower_bound() {
    assert_de_tokens(
        &DeadzoneSettings::new(DeadzoneAlgorithm::Cubic, 0.0),
        &[
            Token::Struct {
                name: "DeadzoneSettings",
                len: 2,
            },
            Token::Str("algorithm"),
            Token::UnitVariant {
                name: "DeadzoneAlgorithm",
                variant: "Cubic",
            },
            Token::Str("deadzone"),
            Token::F32(f32::NAN),
            Token::StructEnd,
        ],
    );
}

#[test]
fn loaded_bounds_without_live_zone_are_rejected() {
    assert_de_tokens_error::<DeadzoneSettings>(
        &[
            Token::Struct {
                name: "DeadzoneSettings",
                len: 3,
            },
            Token::Str("algorithm"),
            Token::UnitVariant {
                name: "DeadzoneAlgorithm",
                variant: "Radial",
            },
            Token::Str("deadzone"),
            Token::F32(0.3),
            Token::Str("bounds"),
            Token::Struct {
                name: "DeadzoneBounds",
                len: 3,
            },
            Token::Str("min"),
            Token::F32(0.0),
            Token::Str("max"),
            Token::F32(5.0),
            Token::Str("step"),
            Token::F32(0.01),
            Token::StructEnd,
            Token::StructEnd,
        ],
        "deadzone bounds must stay below 1.0, got a maximum of 5",
    );
}

#[test]
fn loaded_bounds_with_negative_step_are_rejected() {
    assert_de_tokens_error::<DeadzoneBounds>(
        &[
            Token::Struct {
                name: "DeadzoneBounds",
                len: 3,
            },
            Token::Str("min"),
            Token::F32(0.0),
            Token::Str("max"),
            Token::F32(0.5),
            Token::Str("step"),
            Token::F32(-0.5),
            Token::StructEnd,
        ],
        "deadzone step must be positive, got -0.5",
    );
}

#[test]
fn control_event_serializes_as_variant_name() {
    assert_tokens(
        &ControlEvent::NextAlgorithm,
        &[Token::UnitVariant {
            name: "ControlEvent",
            variant: "NextAlgorithm",
        }],
    );
}

#[test]
fn settings_live_in_a_world() {
    let mut world = World::new();
    world.insert_resource(DeadzoneSettings::default());

    let mut settings = world.resource_mut::<DeadzoneSettings>();
    let next = settings.handle(ControlEvent::NextAlgorithm);
    *settings = next;

    assert_eq!(
        world.resource::<DeadzoneSettings>().algorithm(),
        DeadzoneAlgorithm::Axial
    );
}
