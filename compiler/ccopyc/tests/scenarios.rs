//! End-to-end runs: real files through lexer, scanner, generator and writer.

use std::path::PathBuf;

use ccopy_gen::ClassOutcome;
use ccopyc::{process_file, DriverError, Options, Outcome};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PREAMBLE: &str = "#define AUTHOR ccopy\n#define PROGRAM ccopy\n";

struct Fixture {
    dir: TempDir,
    input: PathBuf,
}

impl Fixture {
    fn new(name: &str, source: &str) -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        let input = dir.path().join(name);
        std::fs::write(&input, source).unwrap_or_else(|e| panic!("failed to write source: {e}"));
        Fixture { dir, input }
    }

    fn options(&self) -> Options {
        Options::new(&self.input)
    }

    fn run(&self) -> Outcome {
        self.run_with(&self.options())
    }

    fn run_with(&self, options: &Options) -> Outcome {
        process_file(options, |_| {}).unwrap_or_else(|e| panic!("processing failed: {e}"))
    }

    fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
    }
}

fn lines(outcome: &Outcome) -> Vec<String> {
    outcome.report.iter().map(ToString::to_string).collect()
}

const WIDGET: &str = "\
#include <thread>

class C4 {};
enum Color { Red, Green };
struct SomeRecord { int v; };

class Widget : public C4 {
    int a;
    enum Color b;
    SomeRecord c;
    SomeRecord* d;
};
";

#[test]
fn test_mixed_fields_generate_constructor() {
    let fixture = Fixture::new("widget.hpp", WIDGET);
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome),
        vec![
            "skipping code generation for C4, no C4 marker base",
            "skipping code generation for SomeRecord, no C4 marker base",
            "generating copy constructor for Widget, 2 copy groups",
        ]
    );
    assert_eq!(outcome.output, Some(fixture.dir.path().join("widget_out.hpp")));

    let expected = format!(
        "{PREAMBLE}\
#include <thread>

class C4 {{}};
enum Color {{ Red, Green }};
struct SomeRecord {{ int v; }};

class Widget : public C4 {{
    int a;
    enum Color b;
    SomeRecord c;
    SomeRecord* d;

public:
    Widget(const Widget& other) {{
        std::thread default_group_task([&]() {{
            a = other.a;
            b = other.b;
            d = other.d;
        }});
        std::thread c4_fields_task([&]() {{
            c = other.c;
        }});
        default_group_task.join();
        c4_fields_task.join();
    }}

}};
"
    );
    assert_eq!(fixture.read("widget_out.hpp"), expected);
}

#[test]
fn test_single_group_is_annotated() {
    let source = "class Pair : public C4 {\n    int x;\n    int y;\n};\n";
    let fixture = Fixture::new("pair.cpp", source);
    let outcome = fixture.run();

    assert_eq!(
        outcome.report.classes()[0].outcome,
        ClassOutcome::TooFewGroups { groups: 1 }
    );
    assert_eq!(
        fixture.read("pair_out.cpp"),
        format!(
            "{PREAMBLE}class Pair : public C4 {{\n    int x;\n    int y;\n\
             // less than 2 copy groups, default copy constructor fits\n}};\n"
        )
    );
}

#[test]
fn test_empty_class_is_annotated() {
    let fixture = Fixture::new("empty.h", "struct Empty : C4 {};\n");
    let outcome = fixture.run();

    assert_eq!(
        outcome.report.classes()[0].outcome,
        ClassOutcome::TooFewGroups { groups: 0 }
    );
    assert!(!fixture.read("empty_out.h").contains("Empty(const Empty&"));
}

#[test]
fn test_unmarked_class_is_left_alone() {
    let source = WIDGET.replace("class Widget : public C4", "class Widget : public Base");
    let fixture = Fixture::new("widget.hpp", &source);
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome)[2],
        "skipping code generation for Widget, no C4 marker base"
    );
    assert_eq!(outcome.report.generated_count(), 0);
    assert_eq!(fixture.read("widget_out.hpp"), format!("{PREAMBLE}{source}"));
}

#[test]
fn test_user_copy_constructor_wins() {
    let source = WIDGET.replace(
        "    int a;\n",
        "    int a;\npublic:\n    Widget(const Widget& o) = default;\n",
    );
    let fixture = Fixture::new("widget.hpp", &source);
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome)[2],
        "skipping code generation for Widget, user-declared copy constructor found"
    );
    assert_eq!(fixture.read("widget_out.hpp"), format!("{PREAMBLE}{source}"));
}

#[test]
fn test_forward_declaration_is_skipped() {
    let fixture = Fixture::new("fwd.hpp", "class Widget;\nclass Widget : C4 { int a; Big b; };\n");
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome),
        vec![
            "skipping code generation for Widget, not a complete definition",
            "generating copy constructor for Widget, 2 copy groups",
        ]
    );
}

#[test]
fn test_custom_marker_and_output_path() {
    let source = "namespace lib { struct Heavy {}; }\nstruct Node : lib::Heavy { int id; Payload data; };\n";
    let fixture = Fixture::new("node.cc", source);
    let mut options = fixture.options();
    options.marker = "Heavy".to_string();
    options.marker_suffix = true;
    options.author = "tester".to_string();
    options.output = Some(fixture.dir.path().join("generated.cc"));

    let outcome = fixture.run_with(&options);

    assert_eq!(outcome.report.generated_count(), 1);
    let written = fixture.read("generated.cc");
    assert!(written.starts_with("#define AUTHOR tester\n#define PROGRAM ccopy\n"));
    assert!(written.contains("Node(const Node& other) {"));
    assert!(written.contains("data = other.data;"));
    assert!(!fixture.dir.path().join("node_out.cc").exists());
}

#[test]
fn test_nested_classes_each_get_a_constructor() {
    let source = "\
struct Outer : C4 {
    struct Inner : C4 { int n; Blob blob; };
    Inner inner;
    int count;
};
";
    let fixture = Fixture::new("nested.hpp", source);
    let outcome = fixture.run();

    assert_eq!(
        outcome
            .report
            .iter()
            .map(|c| c.class_name.as_str())
            .collect::<Vec<_>>(),
        vec!["Outer", "Inner"]
    );
    assert_eq!(outcome.report.generated_count(), 2);
    let written = fixture.read("nested_out.hpp");
    assert!(written.contains("Inner(const Inner& other) {"));
    assert!(written.contains("Outer(const Outer& other) {"));
    assert!(written.contains("inner = other.inner;"));
}

#[test]
fn test_stdout_mode_writes_nothing() {
    let fixture = Fixture::new("widget.hpp", WIDGET);
    let mut options = fixture.options();
    options.to_stdout = true;

    let outcome = fixture.run_with(&options);

    assert_eq!(outcome.output, None);
    let text = outcome.text.unwrap_or_else(|| panic!("expected text"));
    assert!(text.starts_with(PREAMBLE));
    assert!(text.contains("c4_fields_task.join();"));
    assert!(!fixture.dir.path().join("widget_out.hpp").exists());
}

#[test]
fn test_unwritable_output_is_an_error() {
    let fixture = Fixture::new("widget.hpp", WIDGET);
    let mut options = fixture.options();
    options.output = Some(fixture.dir.path().join("no_such_dir").join("out.hpp"));

    let mut progress = Vec::new();
    let err = process_file(&options, |class| progress.push(class.to_string()))
        .err()
        .unwrap_or_else(|| panic!("expected failure"));
    assert!(matches!(err, DriverError::Output(_)));
    assert!(!fixture.dir.path().join("no_such_dir").exists());
    assert_eq!(
        progress.last().map(String::as_str),
        Some("generating copy constructor for Widget, 2 copy groups")
    );
}

#[test]
fn test_qualified_marker_needs_opt_in() {
    let source = "namespace thirdparty { struct C4 {}; }\n\
                  struct Node : thirdparty::C4 { int id; Payload data; };\n";
    let fixture = Fixture::new("node.cc", source);

    let outcome = fixture.run();
    assert_eq!(
        lines(&outcome)[1],
        "skipping code generation for Node, no C4 marker base"
    );

    let mut options = fixture.options();
    options.marker_suffix = true;
    assert_eq!(fixture.run_with(&options).report.generated_count(), 1);
}

#[test]
fn test_anonymous_union_members_are_copied() {
    let fixture = Fixture::new(
        "w.hpp",
        "struct W : C4 { int a; Big b; union { int i; float f; }; };\n",
    );
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome),
        vec!["generating copy constructor for W, 2 copy groups"]
    );
    let written = fixture.read("w_out.hpp");
    for field in ["a", "b", "i", "f"] {
        assert!(
            written.contains(&format!("{field} = other.{field};")),
            "{field} not copied"
        );
    }
    let default_task = written
        .split("std::thread ")
        .find(|task| task.starts_with("default_group_task"))
        .unwrap_or_else(|| panic!("no default task"));
    assert!(default_task.contains("i = other.i;"));
    assert!(default_task.contains("f = other.f;"));
}

#[test]
fn test_template_parameter_fields_stay_in_default_group() {
    let fixture = Fixture::new(
        "box.hpp",
        "template <typename T> class Box : public C4 { T value; int n; };\n",
    );
    let outcome = fixture.run();

    assert_eq!(
        outcome.report.classes()[0].outcome,
        ClassOutcome::TooFewGroups { groups: 1 }
    );
    assert!(!fixture.read("box_out.hpp").contains("c4_fields_task"));
}

#[test]
fn test_qualified_copy_constructor_is_respected() {
    let source = "namespace ns { class W : public C4 { int a; Big b; public: W(const ns::W& o); }; }\n";
    let fixture = Fixture::new("w.hpp", source);
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome),
        vec!["skipping code generation for W, user-declared copy constructor found"]
    );
    assert_eq!(fixture.read("w_out.hpp"), format!("{PREAMBLE}{source}"));
}

#[test]
fn test_local_class_in_function_body() {
    let fixture = Fixture::new(
        "local.cpp",
        "void f() {\n    struct L : C4 { int a; Big b; };\n    L l;\n}\n",
    );
    let outcome = fixture.run();

    assert_eq!(
        lines(&outcome),
        vec!["generating copy constructor for L, 2 copy groups"]
    );
    assert!(fixture.read("local_out.cpp").contains("L(const L& other) {"));
}
