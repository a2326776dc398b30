use super::{RuleKind, Violation};
use crate::models::Operation;

/// Checks the identity of a single operation: its id and its tags
pub struct OperationValidator<'a> {
    verb: &'a str,
    operation: &'a Operation,
}

impl<'a> OperationValidator<'a> {
    pub fn new(verb: &'a str, operation: &'a Operation) -> Self {
        Self { verb, operation }
    }

    /// Validate the operation id and tags
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::with_capacity(2);
        let operation_id = self.operation.operation_id.as_str();

        if operation_id.is_empty() {
            violations.push(Violation::new(
                RuleKind::MissingOperationId,
                "Missing operation id.",
            ));
        } else if !begins_with_verb(operation_id, self.verb) {
            violations.push(
                Violation::new(
                    RuleKind::OperationIdPrefix,
                    format!("Resource must begin with '{}'.", self.verb),
                )
                .with_operation(operation_id),
            );
        }

        // Reported without the operation id; the resource grouping gives context
        if self.operation.tags.is_empty() {
            violations.push(Violation::new(
                RuleKind::MissingTag,
                "Resource must define at least one tag.",
            ));
        }

        violations
    }
}

/// Compare the verb against the same-length head of the lower-cased id.
///
/// An id shorter than the verb has no such head and counts as a mismatch.
fn begins_with_verb(operation_id: &str, verb: &str) -> bool {
    operation_id.to_lowercase().get(..verb.len()) == Some(verb)
}
