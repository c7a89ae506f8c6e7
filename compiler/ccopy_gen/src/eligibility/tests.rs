use super::*;
use ccopy_ir::Span;
use pretty_assertions::assert_eq;

fn marked() -> ClassDescriptor {
    ClassDescriptor::definition("Widget", 0).with_base("C4")
}

fn bases(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[test]
fn test_marked_definition_is_eligible() {
    let config = InjectConfig::default();
    assert_eq!(check_eligibility(&marked(), &config), Eligibility::Eligible);
    assert!(is_eligible(&marked(), &config));
}

#[test]
fn test_each_condition_alone_blocks() {
    let config = InjectConfig::default();

    let with_ctor = marked().with_user_copy_constructor();
    assert_eq!(check_eligibility(&with_ctor, &config), Eligibility::UserCopyConstructor);

    let mut forward = ClassDescriptor::forward("Widget", Span::new(0, 13));
    forward.bases.push("C4".to_string());
    assert_eq!(check_eligibility(&forward, &config), Eligibility::IncompleteDefinition);

    let unmarked = ClassDescriptor::definition("Widget", 0).with_base("Base");
    assert_eq!(
        check_eligibility(&unmarked, &config),
        Eligibility::MissingMarker {
            marker: "C4".to_string()
        }
    );
}

#[test]
fn test_user_copy_constructor_reported_first() {
    let class = ClassDescriptor::forward("Widget", Span::new(0, 13)).with_user_copy_constructor();
    assert_eq!(
        check_eligibility(&class, &InjectConfig::default()),
        Eligibility::UserCopyConstructor
    );
}

#[test]
fn test_reasons() {
    assert_eq!(
        Eligibility::UserCopyConstructor.to_string(),
        "user-declared copy constructor found"
    );
    assert_eq!(
        Eligibility::IncompleteDefinition.to_string(),
        "not a complete definition"
    );
    assert_eq!(
        Eligibility::MissingMarker {
            marker: "Heavy".to_string()
        }
        .to_string(),
        "no Heavy marker base"
    );
}

#[test]
fn test_exact_marker_matching() {
    let exact = MarkerMatch::Exact;
    assert!(carries_marker(&bases(&["Base", "C4"]), "C4", exact));
    assert!(carries_marker(&bases(&["::C4"]), "C4", exact));
    assert!(carries_marker(&bases(&["lib::C4"]), "lib::C4", exact));
    assert!(carries_marker(&bases(&["::lib::C4"]), "::lib::C4", exact));

    assert!(!carries_marker(&bases(&["thirdparty::C4"]), "C4", exact));
    assert!(!carries_marker(&bases(&["other::C4"]), "lib::C4", exact));
    assert!(!carries_marker(&bases(&["C4<int>"]), "C4", exact));
    assert!(!carries_marker(&bases(&["C40", "XC4"]), "C4", exact));
    assert!(!carries_marker(&bases(&[]), "C4", exact));
    assert!(!carries_marker(&bases(&["C4"]), "", exact));
}

#[test]
fn test_suffix_marker_matching() {
    let suffix = MarkerMatch::Suffix;
    assert!(carries_marker(&bases(&["lib::C4"]), "C4", suffix));
    assert!(carries_marker(&bases(&["C4"]), "C4", suffix));

    assert!(!carries_marker(&bases(&["other::C4"]), "lib::C4", suffix));
    assert!(!carries_marker(&bases(&["lib::C40"]), "C4", suffix));
}

#[test]
fn test_qualified_base_needs_suffix_matching() {
    let class = ClassDescriptor::definition("Widget", 0).with_base("thirdparty::C4");
    assert!(!is_eligible(&class, &InjectConfig::default()));
    assert!(is_eligible(
        &class,
        &InjectConfig::default().matching(MarkerMatch::Suffix)
    ));
}

#[test]
fn test_custom_marker() {
    let config = InjectConfig::with_marker("Heavy");
    let class = ClassDescriptor::definition("Widget", 0).with_base("C4");
    assert!(!is_eligible(&class, &config));
    assert!(is_eligible(&class.with_base("Heavy"), &config));
}
