use super::naming::{ModelSuffix, NamingMatcher};
use super::{RuleKind, Violation};
use crate::models::{Operation, Parameter};

/// Validator for parameter naming conventions
pub struct ParameterValidator<'a> {
    operation: &'a Operation,
    matcher: &'a NamingMatcher,
}

impl<'a> ParameterValidator<'a> {
    pub fn new(operation: &'a Operation, matcher: &'a NamingMatcher) -> Self {
        Self { operation, matcher }
    }

    /// Validate every parameter of the operation, in declaration order
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = vec![];

        for parameter in &self.operation.parameters {
            match parameter.location.as_str() {
                "body" => violations.extend(self.check_body(parameter)),
                "query" => violations.extend(self.check_query(parameter)),
                _ => {}
            }
        }

        violations
    }

    fn check_body(&self, parameter: &Parameter) -> Option<Violation> {
        let schema_ref = parameter.schema_ref();
        if schema_ref.is_empty() || self.matcher.matches(schema_ref, ModelSuffix::Request) {
            return None;
        }

        Some(
            Violation::new(
                RuleKind::BodyRequestModel,
                format!(
                    "Body request model must be prefixed with method+Request: '{}'.",
                    schema_ref
                ),
            )
            .with_operation(&self.operation.operation_id),
        )
    }

    fn check_query(&self, parameter: &Parameter) -> Option<Violation> {
        if parameter.name.to_lowercase() == parameter.name {
            return None;
        }

        Some(
            Violation::new(
                RuleKind::QueryParameterCase,
                format!("Query arguments must be lowercase: '{}'", parameter.name),
            )
            .with_operation(&self.operation.operation_id),
        )
    }
}
