//! Injection driver: walk every class, decide, hand text to the emitter.

use std::collections::VecDeque;
use std::fmt;

use ccopy_ir::{ClassDescriptor, DeclarationSource, TextEmitter};
use tracing::{debug, info};

use crate::{
    check_eligibility, generate, partition, should_generate_concurrent_body, Eligibility,
    InjectConfig,
};

/// Inserted in place of a constructor when a class has fewer than two groups.
pub const SKIP_ANNOTATION: &str = "// less than 2 copy groups, default copy constructor fits\n";

/// What happened to one class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassOutcome {
    /// A concurrent copy constructor was inserted.
    Generated { groups: usize },
    /// Eligible, but too few groups; the skip annotation was inserted.
    TooFewGroups { groups: usize },
    /// Filtered out before partitioning; nothing was inserted.
    Ineligible(Eligibility),
}

/// One progress line: `"<verb> for <class>, <reason>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassReport {
    pub class_name: String,
    pub outcome: ClassOutcome,
}

impl ClassReport {
    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, ClassOutcome::Generated { .. })
    }

    pub fn verb(&self) -> &'static str {
        if self.is_generated() {
            "generating copy constructor"
        } else {
            "skipping code generation"
        }
    }
}

impl fmt::Display for ClassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}, ", self.verb(), self.class_name)?;
        match &self.outcome {
            ClassOutcome::Generated { groups } => write!(f, "{groups} copy groups"),
            ClassOutcome::TooFewGroups { .. } => {
                f.write_str("less than 2 copy groups, default copy constructor fits")
            }
            ClassOutcome::Ineligible(reason) => write!(f, "{reason}"),
        }
    }
}

/// Reports for every class of one run, in visit order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InjectionReport {
    classes: Vec<ClassReport>,
}

impl InjectionReport {
    pub fn classes(&self) -> &[ClassReport] {
        &self.classes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassReport> {
        self.classes.iter()
    }

    /// Number of classes that received a generated constructor.
    pub fn generated_count(&self) -> usize {
        self.classes.iter().filter(|c| c.is_generated()).count()
    }

    pub fn get(&self, class_name: &str) -> Option<&ClassReport> {
        self.classes.iter().find(|c| c.class_name == class_name)
    }
}

impl<'a> IntoIterator for &'a InjectionReport {
    type Item = &'a ClassReport;
    type IntoIter = std::slice::Iter<'a, ClassReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// Visit every class `source` declares, in order, and finalize `emitter`.
///
/// Each visit is independent of the others. Text reaches the emitter only for
/// eligible classes: either a generated constructor or [`SKIP_ANNOTATION`],
/// at the class's insertion offset.
///
/// # Errors
///
/// Returns the emitter's error if `finalize` fails; the report is discarded.
pub fn inject<S, E>(
    source: &S,
    emitter: &mut E,
    config: &InjectConfig,
) -> Result<InjectionReport, E::Error>
where
    S: DeclarationSource + ?Sized,
    E: TextEmitter + ?Sized,
{
    inject_with_progress(source, emitter, config, |_| {})
}

/// [`inject`], calling `on_class` with each report as soon as its class has
/// been visited, before the emitter is finalized.
///
/// # Errors
///
/// Returns the emitter's error if `finalize` fails.
pub fn inject_with_progress<S, E, F>(
    source: &S,
    emitter: &mut E,
    config: &InjectConfig,
    mut on_class: F,
) -> Result<InjectionReport, E::Error>
where
    S: DeclarationSource + ?Sized,
    E: TextEmitter + ?Sized,
    F: FnMut(&ClassReport),
{
    let mut worklist: VecDeque<ClassDescriptor> = source.class_declarations().into();
    debug!(classes = worklist.len(), marker = %config.marker, "injection started");

    let mut report = InjectionReport::default();
    while let Some(class) = worklist.pop_front() {
        let entry = visit_class(&class, emitter, config);
        info!("{entry}");
        on_class(&entry);
        report.classes.push(entry);
    }

    emitter.finalize()?;
    Ok(report)
}

fn visit_class<E>(class: &ClassDescriptor, emitter: &mut E, config: &InjectConfig) -> ClassReport
where
    E: TextEmitter + ?Sized,
{
    let report = |outcome| ClassReport {
        class_name: class.name.clone(),
        outcome,
    };

    let eligibility = check_eligibility(class, config);
    if !eligibility.is_eligible() {
        return report(ClassOutcome::Ineligible(eligibility));
    }

    let groups = partition(&class.fields);
    debug!(class = %class.name, groups = groups.len(), fields = groups.field_count(), "partitioned");

    if !should_generate_concurrent_body(&groups) {
        emitter.insert_text_after(class.insertion_offset, SKIP_ANNOTATION);
        return report(ClassOutcome::TooFewGroups {
            groups: groups.len(),
        });
    }

    let body = generate(&class.name, &groups);
    emitter.insert_text_after(class.insertion_offset, body.as_str());
    report(ClassOutcome::Generated {
        groups: groups.len(),
    })
}

#[cfg(test)]
mod tests;
