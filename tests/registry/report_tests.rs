//! Integration tests for the reporting operations
//!
//! The core contract under test is stable ordering: category registration
//! order, then parameter registration order within each category, identical
//! bytes across repeated calls.

use crate::test_helpers::solver_registry;

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> paramreg_rs::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parameter_values_are_grouped_and_ordered() {
    let registry = solver_registry();

    let text = render(|out| registry.write_parameter_values(out));

    assert_eq!(
        text,
        "[algorithm]\n\
         \x20   depth = 4\n\
         \x20   seed = 0\n\
         \x20   sparsity = 0\n\
         \x20   objective = accuracy\n\
         [output]\n\
         \x20   verbose = false\n\
         \x20   result-file = \n"
    );
}

#[test]
fn parameter_values_enumerate_every_parameter_exactly_once() {
    let registry = solver_registry();

    let text = render(|out| registry.write_parameter_values(out));

    for name in registry.names() {
        let needle = format!("    {} = ", name);
        assert_eq!(
            text.matches(&needle).count(),
            1,
            "expected exactly one line for {}",
            name
        );
    }
}

#[test]
fn reports_are_stable_across_repeated_calls() {
    let registry = solver_registry();

    let first = render(|out| registry.write_parameter_values(out));
    let second = render(|out| registry.write_parameter_values(out));
    assert_eq!(first, second);

    let first = render(|out| registry.write_help_summary(out));
    let second = render(|out| registry.write_help_summary(out));
    assert_eq!(first, second);
}

#[test]
fn difference_report_is_empty_before_any_mutation() {
    let registry = solver_registry();

    let text = render(|out| registry.write_parameters_different_from_default(out));
    assert!(text.is_empty());
}

#[test]
fn difference_report_lists_exactly_the_changed_parameter() {
    let mut registry = solver_registry();
    registry.set_integer_parameter("depth", 9).unwrap();

    let text = render(|out| registry.write_parameters_different_from_default(out));

    assert_eq!(
        text,
        "[algorithm]\n\
         \x20   depth = 9 (default: 4)\n"
    );
}

#[test]
fn difference_report_uses_exact_equality() {
    let mut registry = solver_registry();

    // Setting a parameter to its default keeps the report empty
    registry.set_integer_parameter("depth", 4).unwrap();
    registry.set_float_parameter("sparsity", 0.0).unwrap();
    let text = render(|out| registry.write_parameters_different_from_default(out));
    assert!(text.is_empty());

    // Any bit-level float difference shows up
    registry.set_float_parameter("sparsity", 1e-12).unwrap();
    let text = render(|out| registry.write_parameters_different_from_default(out));
    assert!(text.contains("sparsity"));
}

#[test]
fn help_summary_lists_kind_default_and_constraints() {
    let registry = solver_registry();

    let text = render(|out| registry.write_help_summary(out));

    assert_eq!(
        text,
        "[algorithm] Core search settings\n\
         \x20   depth: integer (default: 4, range [1, 20])\n\
         \x20       Maximum tree depth\n\
         \x20   seed: integer (default: 0)\n\
         \x20       Random seed\n\
         \x20   sparsity: float (default: 0, range [0, 1])\n\
         \x20       Sparsity coefficient in the objective\n\
         \x20   objective: string (default: accuracy, allowed: accuracy, f1-score)\n\
         \x20       Optimization objective\n\
         [output] Result reporting\n\
         \x20   verbose: boolean (default: false)\n\
         \x20       Print progress\n\
         \x20   result-file: string (default: )\n\
         \x20       Where to write results\n"
    );
}

#[test]
fn reports_do_not_mutate_state() {
    let mut registry = solver_registry();
    registry.set_integer_parameter("depth", 9).unwrap();

    let before = render(|out| registry.write_parameter_values(out));
    let _ = render(|out| registry.write_help_summary(out));
    let _ = render(|out| registry.write_parameters_different_from_default(out));
    let after = render(|out| registry.write_parameter_values(out));

    assert_eq!(before, after);
    assert_eq!(registry.get_integer_parameter("depth").unwrap(), 9);
}
