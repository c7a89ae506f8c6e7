//! Concurrent copy-constructor text generation.
//!
//! One `std::thread` per copy group, all launched before any is joined:
//!
//! ```text
//! public:
//!     Widget(const Widget& other) {
//!         std::thread default_group_task([&]() {
//!             a = other.a;
//!         });
//!         std::thread c4_fields_task([&]() {
//!             c = other.c;
//!         });
//!         default_group_task.join();
//!         c4_fields_task.join();
//!     }
//! ```

use ccopy_ir::{CopyGroup, GeneratedBody, GroupPartition};
use tracing::debug;

const INDENT: &str = "    ";

/// Render the copy constructor for `class_name` over `partition`.
///
/// Callers gate this with
/// [`should_generate_concurrent_body`](crate::should_generate_concurrent_body);
/// a partition with fewer groups still renders, just without any benefit.
pub fn generate(class_name: &str, partition: &GroupPartition) -> GeneratedBody {
    let param = unique_name("other", partition);
    let tasks: Vec<String> = partition
        .iter()
        .map(|group| unique_name(&format!("{}_task", group.label), partition))
        .collect();

    let mut out = CodeWriter::new();
    out.blank();
    out.line(0, "public:");
    out.line(1, &format!("{class_name}(const {class_name}& {param}) {{"));
    for (group, task) in partition.iter().zip(&tasks) {
        write_task(&mut out, group, task, &param);
    }
    for task in &tasks {
        out.line(2, &format!("{task}.join();"));
    }
    out.line(1, "}");
    out.blank();

    debug!(class = class_name, groups = partition.len(), "generated copy constructor");
    GeneratedBody::new(class_name, out.finish())
}

fn write_task(out: &mut CodeWriter, group: &CopyGroup, task: &str, param: &str) {
    out.line(2, &format!("std::thread {task}([&]() {{"));
    for field in &group.fields {
        out.line(3, &format!("{field} = {param}.{field};"));
    }
    out.line(2, "});");
}

/// `base`, with underscores appended until no field of the class shares it.
fn unique_name(base: &str, partition: &GroupPartition) -> String {
    let mut name = base.to_owned();
    while partition.field_names().any(|field| field == name) {
        name.push('_');
    }
    name
}

/// Line-oriented text accumulator with fixed-width indentation.
struct CodeWriter {
    buf: String,
}

impl CodeWriter {
    fn new() -> Self {
        CodeWriter { buf: String::new() }
    }

    fn line(&mut self, level: usize, text: &str) {
        for _ in 0..level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn finish(self) -> String {
        self.buf
    }
}
