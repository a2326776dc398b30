use super::naming::{ModelSuffix, NamingMatcher};
use super::{RuleKind, Violation};
use crate::models::{Code, Operation, Response};

/// Validator for the shape and naming of successful responses
pub struct ResponseValidator<'a> {
    operation: &'a Operation,
    matcher: &'a NamingMatcher,
}

impl<'a> ResponseValidator<'a> {
    pub fn new(operation: &'a Operation, matcher: &'a NamingMatcher) -> Self {
        Self { operation, matcher }
    }

    /// Validate 2xx responses; every other status code is exempt
    pub fn validate(&self) -> Vec<Violation> {
        self.operation
            .responses
            .iter()
            .filter(|(code, _)| code.is_success())
            .filter_map(|(code, response)| self.check_response(code, response))
            .collect()
    }

    fn check_response(&self, code: &Code, response: &Response) -> Option<Violation> {
        let violation = if response.schema_type() == "array" {
            Violation::new(
                RuleKind::ArrayResponse,
                "Instead of using Array as a response, prefer defining a new model.",
            )
        } else {
            let schema_ref = response.schema_ref();
            if schema_ref.is_empty() || self.matcher.matches(schema_ref, ModelSuffix::Response) {
                return None;
            }

            Violation::new(
                RuleKind::ResponseModel,
                format!(
                    "Code {}, response model must be prefixed with method+Response: '{}'.",
                    code, schema_ref
                ),
            )
        };

        Some(violation.with_operation(&self.operation.operation_id))
    }
}
