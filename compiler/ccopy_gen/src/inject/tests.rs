use super::*;
use ccopy_ir::{Field, Span, TypeDescriptor};
use pretty_assertions::assert_eq;

struct Classes(Vec<ClassDescriptor>);

impl DeclarationSource for Classes {
    fn class_declarations(&self) -> Vec<ClassDescriptor> {
        self.0.clone()
    }
}

#[derive(Default)]
struct Recorder {
    inserted: Vec<(u32, String)>,
    finalized: bool,
    fail: bool,
}

impl TextEmitter for Recorder {
    type Error = &'static str;

    fn insert_text_after(&mut self, offset: u32, text: &str) {
        self.inserted.push((offset, text.to_owned()));
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err("disk full");
        }
        self.finalized = true;
        Ok(())
    }
}

fn widget(offset: u32) -> ClassDescriptor {
    ClassDescriptor::definition("Widget", offset)
        .with_base("C4")
        .with_field(Field::new("a", TypeDescriptor::scalar("int")))
        .with_field(Field::new("b", TypeDescriptor::enumeration("Color")))
        .with_field(Field::new("c", TypeDescriptor::record("SomeRecord")))
        .with_field(Field::new("d", TypeDescriptor::pointer("SomeRecord*")))
}

fn run(classes: Vec<ClassDescriptor>) -> (InjectionReport, Recorder) {
    let mut emitter = Recorder::default();
    let report = inject(&Classes(classes), &mut emitter, &InjectConfig::default())
        .unwrap_or_else(|e| panic!("inject failed: {e}"));
    (report, emitter)
}

#[test]
fn test_generates_for_marked_class() {
    let (report, emitter) = run(vec![widget(40)]);

    assert_eq!(
        report.classes()[0].outcome,
        ClassOutcome::Generated { groups: 2 }
    );
    assert_eq!(
        report.classes()[0].to_string(),
        "generating copy constructor for Widget, 2 copy groups"
    );
    assert_eq!(emitter.inserted.len(), 1);
    assert_eq!(emitter.inserted[0].0, 40);
    assert!(emitter.inserted[0].1.contains("Widget(const Widget& other) {"));
    assert!(emitter.finalized);
}

#[test]
fn test_single_group_inserts_annotation() {
    let class = ClassDescriptor::definition("Pair", 7)
        .with_base("C4")
        .with_field(Field::new("x", TypeDescriptor::scalar("int")))
        .with_field(Field::new("y", TypeDescriptor::scalar("int")));
    let (report, emitter) = run(vec![class]);

    assert_eq!(
        report.classes()[0].to_string(),
        "skipping code generation for Pair, less than 2 copy groups, default copy constructor fits"
    );
    assert_eq!(emitter.inserted, vec![(7, SKIP_ANNOTATION.to_string())]);
}

#[test]
fn test_empty_class_inserts_annotation() {
    let class = ClassDescriptor::definition("Empty", 3).with_base("C4");
    let (report, emitter) = run(vec![class]);

    assert_eq!(
        report.classes()[0].outcome,
        ClassOutcome::TooFewGroups { groups: 0 }
    );
    assert_eq!(emitter.inserted, vec![(3, SKIP_ANNOTATION.to_string())]);
}

#[test]
fn test_ineligible_classes_never_reach_emitter() {
    let mut unmarked = widget(10);
    unmarked.bases.clear();
    let with_ctor = widget(20).with_user_copy_constructor();
    let forward = ClassDescriptor::forward("Widget", Span::new(0, 13));

    let (report, emitter) = run(vec![unmarked, with_ctor, forward]);

    let lines: Vec<String> = report.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "skipping code generation for Widget, no C4 marker base",
            "skipping code generation for Widget, user-declared copy constructor found",
            "skipping code generation for Widget, not a complete definition",
        ]
    );
    assert!(emitter.inserted.is_empty());
    assert!(emitter.finalized);
    assert_eq!(report.generated_count(), 0);
}

#[test]
fn test_visits_in_declaration_order() {
    let mut second = widget(90);
    second.name = "Gadget".to_string();
    let (report, emitter) = run(vec![widget(40), second]);

    let names: Vec<&str> = report.iter().map(|c| c.class_name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);
    assert_eq!(emitter.inserted.iter().map(|i| i.0).collect::<Vec<_>>(), vec![40, 90]);
    assert_eq!(report.generated_count(), 2);
    assert!(report.get("Gadget").is_some_and(ClassReport::is_generated));
}

#[test]
fn test_finalize_failure_propagates() {
    let mut emitter = Recorder {
        fail: true,
        ..Recorder::default()
    };
    let result = inject(&Classes(vec![widget(1)]), &mut emitter, &InjectConfig::default());
    assert_eq!(result, Err("disk full"));
}

#[test]
fn test_progress_reported_before_finalize_failure() {
    let mut emitter = Recorder {
        fail: true,
        ..Recorder::default()
    };
    let mut seen = Vec::new();
    let result = inject_with_progress(
        &Classes(vec![widget(1), ClassDescriptor::definition("Plain", 9)]),
        &mut emitter,
        &InjectConfig::default(),
        |class| seen.push(class.to_string()),
    );

    assert_eq!(result, Err("disk full"));
    assert_eq!(
        seen,
        vec![
            "generating copy constructor for Widget, 2 copy groups",
            "skipping code generation for Plain, no C4 marker base",
        ]
    );
}

#[test]
fn test_no_classes_still_finalizes() {
    let (report, emitter) = run(Vec::new());
    assert!(report.classes().is_empty());
    assert!(emitter.finalized);
}
