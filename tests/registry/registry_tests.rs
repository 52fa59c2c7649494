//! Integration tests for definition, mutation, and query operations

use crate::test_helpers::solver_registry;
use approx::assert_relative_eq;
use paramreg_rs::{ParameterKind, ParameterRegistry, RegistryError};

#[test]
fn set_get_returns_exact_value_inside_bounds() {
    let mut registry = solver_registry();

    for value in [1, 4, 13, 20] {
        registry.set_integer_parameter("depth", value).unwrap();
        assert_eq!(registry.get_integer_parameter("depth").unwrap(), value);
    }

    for value in [0.0, 0.25, 1.0] {
        registry.set_float_parameter("sparsity", value).unwrap();
        assert_eq!(registry.get_float_parameter("sparsity").unwrap(), value);
    }
}

#[test]
fn out_of_range_set_fails_and_preserves_prior_value() {
    let mut registry = solver_registry();
    registry.set_integer_parameter("depth", 13).unwrap();

    for value in [0, 21, i64::MIN, i64::MAX] {
        assert!(matches!(
            registry.set_integer_parameter("depth", value),
            Err(RegistryError::OutOfBounds { .. })
        ));
        assert_eq!(registry.get_integer_parameter("depth").unwrap(), 13);
    }

    registry.set_float_parameter("sparsity", 0.75).unwrap();
    assert!(registry.set_float_parameter("sparsity", -0.1).is_err());
    assert!(registry.set_float_parameter("sparsity", 1.1).is_err());
    assert_relative_eq!(registry.get_float_parameter("sparsity").unwrap(), 0.75);
}

#[test]
fn allow_list_membership_governs_string_sets() {
    let mut registry = solver_registry();

    // Non-empty allow-list: success iff the value is a member
    registry
        .set_string_parameter("objective", "f1-score")
        .unwrap();
    assert!(matches!(
        registry.set_string_parameter("objective", "gini"),
        Err(RegistryError::ValueNotAllowed { .. })
    ));
    assert_eq!(
        registry.get_string_parameter("objective").unwrap(),
        "f1-score"
    );

    // Empty allow-list: any value succeeds
    registry
        .set_string_parameter("result-file", "out/run-1.csv")
        .unwrap();
    assert_eq!(
        registry.get_string_parameter("result-file").unwrap(),
        "out/run-1.csv"
    );
}

#[test]
fn unconstrained_integer_accepts_extremes() {
    let mut registry = solver_registry();

    registry.set_integer_parameter("seed", i64::MIN).unwrap();
    assert_eq!(registry.get_integer_parameter("seed").unwrap(), i64::MIN);

    registry.set_integer_parameter("seed", i64::MAX).unwrap();
    assert_eq!(registry.get_integer_parameter("seed").unwrap(), i64::MAX);
}

#[test]
fn duplicate_definition_fails_second_and_keeps_first() {
    let mut registry = solver_registry();
    registry.set_integer_parameter("depth", 9).unwrap();

    let result = registry.define_integer_parameter("depth", "", 2, "algorithm", 0, 5);
    assert!(matches!(result, Err(RegistryError::DuplicateParameter(_))));

    // The flat namespace also rejects the name under a different kind
    let result = registry.define_float_parameter("depth", "", 0.5, "output", 0.0, 1.0);
    assert!(matches!(result, Err(RegistryError::DuplicateParameter(_))));

    assert_eq!(registry.get_integer_parameter("depth").unwrap(), 9);
    assert_eq!(registry.kind_of("depth"), Some(ParameterKind::Integer));
}

#[test]
fn invalid_defaults_abort_definition() {
    let mut registry = ParameterRegistry::new();
    registry.define_category("algorithm", "").unwrap();

    assert!(matches!(
        registry.define_integer_parameter("depth", "", 25, "algorithm", 1, 20),
        Err(RegistryError::InvalidDefault { .. })
    ));
    assert!(matches!(
        registry.define_float_parameter("sparsity", "", -1.0, "algorithm", 0.0, 1.0),
        Err(RegistryError::InvalidDefault { .. })
    ));
    assert!(matches!(
        registry.define_string_parameter("objective", "", "gini", "algorithm", &["accuracy"]),
        Err(RegistryError::InvalidDefault { .. })
    ));
    assert!(matches!(
        registry.define_integer_parameter("depth", "", 4, "algorithm", 20, 1),
        Err(RegistryError::InvalidBounds { .. })
    ));

    // Nothing was stored by the failed definitions
    assert!(registry.is_empty());
}

#[test]
fn parameter_snapshot_serializes() {
    let registry = solver_registry();
    let param = registry.param("depth").unwrap();

    let json = serde_json::to_string(param).unwrap();
    let restored: paramreg_rs::Parameter = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.name(), "depth");
    assert_eq!(restored.kind(), ParameterKind::Integer);
    assert_eq!(restored.as_integer(), Some(4));
    assert_eq!(restored.constraint_summary().unwrap(), "range [1, 20]");
}

#[cfg(feature = "data")]
#[test]
fn data_payload_defaults_empty_and_round_trips() {
    use paramreg_rs::FeatureVectorBinary;

    let mut registry = solver_registry();
    assert!(registry.data().is_empty());

    let payload = vec![
        vec![
            FeatureVectorBinary::new(0, &[true, false, true, false]),
            FeatureVectorBinary::new(1, &[false, true, false, false]),
        ],
        vec![FeatureVectorBinary::new(2, &[true, true, true, false])],
    ];
    registry.set_data(payload);

    assert_eq!(registry.data().len(), 2);
    assert_eq!(registry.data()[0][1].present_features(), &[1]);
    assert_relative_eq!(registry.data()[1][0].sparsity(), 0.75);

    // The payload is independent of the named parameters
    assert_eq!(registry.len(), 6);
    assert_eq!(registry.get_integer_parameter("depth").unwrap(), 4);
}
