//! Copy groups: the unit of concurrency in a generated copy constructor.

use std::fmt;

/// Bucket a field is copied in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum GroupLabel {
    /// Catch-all: unions, enumerations, pointers and scalars.
    DefaultGroup,
    /// Record-typed fields held by value.
    C4Fields,
}

impl GroupLabel {
    pub const ALL: [GroupLabel; 2] = [GroupLabel::DefaultGroup, GroupLabel::C4Fields];

    /// The identifier used for this group in generated code.
    pub const fn as_str(self) -> &'static str {
        match self {
            GroupLabel::DefaultGroup => "default_group",
            GroupLabel::C4Fields => "c4_fields",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One label and the names of the fields assigned to it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CopyGroup {
    pub label: GroupLabel,
    /// Field names in first-seen order, never empty.
    pub fields: Vec<String>,
}

/// Ordered mapping from group label to field names.
///
/// Groups appear in the order their label was first used; fields within a
/// group keep insertion order. A label exists only once a field maps to it.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GroupPartition {
    groups: Vec<CopyGroup>,
}

impl GroupPartition {
    pub fn new() -> Self {
        GroupPartition { groups: Vec::new() }
    }

    /// Append `field` to the group for `label`, creating the group if needed.
    ///
    /// Returns `false` if the field was already in that group.
    pub fn insert(&mut self, label: GroupLabel, field: &str) -> bool {
        if let Some(group) = self.groups.iter_mut().find(|g| g.label == label) {
            if group.fields.iter().any(|f| f == field) {
                return false;
            }
            group.fields.push(field.to_owned());
        } else {
            self.groups.push(CopyGroup {
                label,
                fields: vec![field.to_owned()],
            });
        }
        true
    }

    /// Number of distinct groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: GroupLabel) -> Option<&CopyGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CopyGroup> {
        self.groups.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = GroupLabel> + '_ {
        self.groups.iter().map(|g| g.label)
    }

    /// Total number of fields across all groups.
    pub fn field_count(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    /// Every field name across all groups, group by group.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.fields.iter().map(String::as_str))
    }
}

impl<'a> IntoIterator for &'a GroupPartition {
    type Item = &'a CopyGroup;
    type IntoIter = std::slice::Iter<'a, CopyGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Copy constructor text produced for one class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedBody {
    class_name: String,
    text: String,
}

impl GeneratedBody {
    pub fn new(class_name: impl Into<String>, text: String) -> Self {
        GeneratedBody {
            class_name: class_name.into(),
            text,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for GeneratedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
