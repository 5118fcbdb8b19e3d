use crate::RequirednessPolicy;
use crate::VariableDescriptor;
use proptest::prelude::*;

fn vars(specs: &[(bool, bool)]) -> Vec<VariableDescriptor> {
    specs.iter()
        .enumerate()
        .map(|(idx, (nullable, has_default))| {
            VariableDescriptor::new(format!("v{idx}"), *nullable, *has_default)
        })
        .collect()
}

#[test]
fn no_variables_is_never_required() {
    assert!(!RequirednessPolicy::Strict.is_required(&[]));
    assert!(!RequirednessPolicy::Lenient.is_required(&[]));
}

#[test]
fn only_nullable_variables_is_never_required() {
    let vars = vars(&[(true, false), (true, true)]);
    assert!(!RequirednessPolicy::Strict.is_required(&vars));
    assert!(!RequirednessPolicy::Lenient.is_required(&vars));
}

#[test]
fn non_null_without_default_is_required_by_both() {
    let vars = vars(&[(true, false), (false, false)]);
    assert!(RequirednessPolicy::Strict.is_required(&vars));
    assert!(RequirednessPolicy::Lenient.is_required(&vars));
}

#[test]
fn non_null_with_default_splits_the_policies() {
    let vars = vars(&[(false, true)]);
    assert!(RequirednessPolicy::Strict.is_required(&vars));
    assert!(!RequirednessPolicy::Lenient.is_required(&vars));
}

proptest! {
    #[test]
    fn lenient_never_requires_more_than_strict(
        specs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..8),
    ) {
        let vars = vars(&specs);
        let strict = RequirednessPolicy::Strict.is_required(&vars);
        let lenient = RequirednessPolicy::Lenient.is_required(&vars);
        prop_assert!(!lenient || strict);
    }

    #[test]
    fn policies_diverge_only_when_every_non_null_has_a_default(
        specs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..8),
    ) {
        let vars = vars(&specs);
        let strict = RequirednessPolicy::Strict.is_required(&vars);
        let lenient = RequirednessPolicy::Lenient.is_required(&vars);
        let non_nulls: Vec<&(bool, bool)> =
            specs.iter().filter(|(nullable, _)| !nullable).collect();
        let diverges = !non_nulls.is_empty()
            && non_nulls.iter().all(|(_, has_default)| *has_default);
        prop_assert_eq!(strict != lenient, diverges);
    }
}
