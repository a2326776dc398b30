use super::Violation;
use crate::models::Resource;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Violations grouped by resource.
///
/// A resource is only present when at least one violation was recorded for
/// it; resources iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    resources: BTreeMap<Resource, Vec<Violation>>,
}

impl ViolationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the combined violations of one resource; an empty list is dropped
    pub fn insert(&mut self, resource: impl Into<Resource>, violations: Vec<Violation>) {
        if !violations.is_empty() {
            self.resources.insert(resource.into(), violations);
        }
    }

    pub fn get(&self, resource: &str) -> Option<&[Violation]> {
        self.resources.get(resource).map(Vec::as_slice)
    }

    pub fn contains_resource(&self, resource: &str) -> bool {
        self.resources.contains_key(resource)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Number of resources with at least one violation
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn total_violations(&self) -> usize {
        self.resources.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Resource, &[Violation])> {
        self.resources.iter().map(|(r, v)| (r, v.as_slice()))
    }

    /// Formatted messages per resource
    pub fn messages(&self) -> BTreeMap<Resource, Vec<String>> {
        self.resources
            .iter()
            .map(|(resource, violations)| {
                (
                    resource.clone(),
                    violations.iter().map(Violation::format).collect(),
                )
            })
            .collect()
    }
}

impl Serialize for ViolationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}
