use super::naming::NamingMatcher;
use super::operations::OperationValidator;
use super::parameters::ParameterValidator;
use super::report::ViolationReport;
use super::responses::ResponseValidator;
use super::Violation;
use crate::error::Result;
use crate::models::{Operation, Swagger};
use tracing::{debug, info};

/// Main validator: runs every rule over every operation of a document
pub struct SwaggerValidator<'a> {
    swagger: &'a Swagger,
}

impl<'a> SwaggerValidator<'a> {
    pub fn new(swagger: &'a Swagger) -> Self {
        Self { swagger }
    }

    /// Validate all resources and group the violations by resource
    pub fn validate_all(&self) -> Result<ViolationReport> {
        let mut report = ViolationReport::new();

        for (resource, item) in &self.swagger.paths {
            let mut violations = vec![];

            for (verb, operation) in &item.operations {
                let found = self.validate_operation(verb, operation)?;
                for violation in &found {
                    debug!(
                        resource = %resource,
                        verb = %verb,
                        rule = %violation.rule,
                        "{}",
                        violation
                    );
                }
                debug!(
                    resource = %resource,
                    verb = %verb,
                    operation_id = %operation.operation_id,
                    violations = found.len(),
                    "Validated operation"
                );
                violations.extend(found);
            }

            report.insert(resource.as_str(), violations);
        }

        info!(
            resources = self.swagger.paths.len(),
            operations = self.swagger.operation_count(),
            violations = report.total_violations(),
            "Validation finished"
        );

        Ok(report)
    }

    /// Run the identity, parameter and response rules, in that order
    pub fn validate_operation(&self, verb: &str, operation: &Operation) -> Result<Vec<Violation>> {
        let matcher = NamingMatcher::new(&operation.operation_id)?;

        let mut violations = OperationValidator::new(verb, operation).validate();
        violations.extend(ParameterValidator::new(operation, &matcher).validate());
        violations.extend(ResponseValidator::new(operation, &matcher).validate());

        Ok(violations)
    }
}

/// Validate a document against the naming conventions
pub fn validate(swagger: &Swagger) -> Result<ViolationReport> {
    SwaggerValidator::new(swagger).validate_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Parameter, PathItem, Response, Schema};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn messages(swagger: &Swagger) -> BTreeMap<String, Vec<String>> {
        validate(swagger).unwrap().messages()
    }

    fn expected(resource: &str, messages: &[&str]) -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([(
            resource.to_string(),
            messages.iter().map(|m| m.to_string()).collect(),
        )])
    }

    #[test]
    fn test_missing_operation_id() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation("get", Operation::default().with_tag("tag")),
        );

        assert_eq!(messages(&swagger), expected("/items", &["Missing operation id."]));
    }

    #[test]
    fn test_resource_must_begin_with_method() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation("get", Operation::new("itemsOperationID").with_tag("tag")),
        );

        assert_eq!(
            messages(&swagger),
            expected("/items", &["'itemsOperationID': Resource must begin with 'get'."])
        );
    }

    #[test]
    fn test_resource_must_define_a_tag() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation("get", Operation::new("getItems")),
        );

        assert_eq!(
            messages(&swagger),
            expected("/items", &["Resource must define at least one tag."])
        );
    }

    #[test]
    fn test_body_request_model_prefix() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation(
                "post",
                Operation::new("postItems")
                    .with_tag("tag")
                    .with_parameter(Parameter::body("#/definitions/postItems")),
            ),
        );

        assert_eq!(
            messages(&swagger),
            expected(
                "/items",
                &["'postItems': Body request model must be prefixed with method+Request: '#/definitions/postItems'."]
            )
        );
    }

    #[test]
    fn test_query_arguments_lowercase() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation(
                "get",
                Operation::new("getItems")
                    .with_tag("tag")
                    .with_parameter(Parameter::query("deletedAt")),
            ),
        );

        assert_eq!(
            messages(&swagger),
            expected("/items", &["'getItems': Query arguments must be lowercase: 'deletedAt'"])
        );
    }

    #[test]
    fn test_array_response() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation(
                "get",
                Operation::new("getItems").with_tag("tag").with_response(
                    "200",
                    Response::with_schema(Schema {
                        schema_type: Some("array".to_string()),
                        ..Schema::default()
                    }),
                ),
            ),
        );

        assert_eq!(
            messages(&swagger),
            expected(
                "/items",
                &["'getItems': Instead of using Array as a response, prefer defining a new model."]
            )
        );
    }

    #[test]
    fn test_response_model_prefix() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new().with_operation(
                "get",
                Operation::new("getItems").with_tag("tag").with_response(
                    "200",
                    Response::with_schema(Schema::reference("#/definitions/getItems")),
                ),
            ),
        );

        assert_eq!(
            messages(&swagger),
            expected(
                "/items",
                &["'getItems': Code 200, response model must be prefixed with method+Response: '#/definitions/getItems'."]
            )
        );
    }

    #[test]
    fn test_clean_resources_are_absent() {
        let swagger = Swagger::default()
            .with_path(
                "/items",
                PathItem::new().with_operation(
                    "get",
                    Operation::new("getItems").with_tag("items").with_response(
                        "200",
                        Response::with_schema(Schema::reference("#/definitions/GetItemsResponse")),
                    ),
                ),
            )
            .with_path(
                "/users",
                PathItem::new().with_operation("get", Operation::new("getUsers")),
            );

        let report = validate(&swagger).unwrap();

        assert!(!report.contains_resource("/items"));
        assert!(report.contains_resource("/users"));
        assert_eq!(report.resource_count(), 1);
    }

    #[test]
    fn test_empty_document_is_clean() {
        let report = validate(&Swagger::default()).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.total_violations(), 0);
    }

    #[test]
    fn test_violations_accumulate_across_verbs() {
        let swagger = Swagger::default().with_path(
            "/items",
            PathItem::new()
                .with_operation("post", Operation::new("createItem"))
                .with_operation("get", Operation::new("getItems"))
                .with_operation("delete", Operation::new("deleteItems").with_tag("tag")),
        );

        assert_eq!(
            messages(&swagger),
            expected(
                "/items",
                &[
                    "Resource must define at least one tag.",
                    "'createItem': Resource must begin with 'post'.",
                    "Resource must define at least one tag.",
                ]
            )
        );
    }

    #[test]
    fn test_check_order_within_operation() {
        let operation = Operation::new("fetchItems")
            .with_parameter(Parameter::query("pageSize"))
            .with_response(
                "200",
                Response::with_schema(Schema::reference("#/definitions/Items")),
            );
        let swagger = Swagger::default();
        let violations = SwaggerValidator::new(&swagger)
            .validate_operation("get", &operation)
            .unwrap();
        let formatted: Vec<_> = violations.iter().map(Violation::format).collect();

        assert_eq!(
            formatted,
            vec![
                "'fetchItems': Resource must begin with 'get'.",
                "Resource must define at least one tag.",
                "'fetchItems': Query arguments must be lowercase: 'pageSize'",
                "'fetchItems': Code 200, response model must be prefixed with method+Response: '#/definitions/Items'.",
            ]
        );
    }
}
