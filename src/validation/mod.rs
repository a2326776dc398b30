mod naming;
mod operations;
mod parameters;
mod report;
mod responses;
mod validator;

pub use naming::{ModelSuffix, NamingMatcher, title_case};
pub use operations::OperationValidator;
pub use parameters::ParameterValidator;
pub use report::ViolationReport;
pub use responses::ResponseValidator;
pub use validator::{SwaggerValidator, validate};

/// Convention a violation was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    // Operation identity
    MissingOperationId,
    OperationIdPrefix,
    MissingTag,

    // Parameters
    BodyRequestModel,
    QueryParameterCase,

    // Responses
    ArrayResponse,
    ResponseModel,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::MissingOperationId => write!(f, "Missing operation id"),
            RuleKind::OperationIdPrefix => write!(f, "Operation id prefix"),
            RuleKind::MissingTag => write!(f, "Missing tag"),
            RuleKind::BodyRequestModel => write!(f, "Body request model naming"),
            RuleKind::QueryParameterCase => write!(f, "Query parameter casing"),
            RuleKind::ArrayResponse => write!(f, "Array response"),
            RuleKind::ResponseModel => write!(f, "Response model naming"),
        }
    }
}

/// A single convention breach found in an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleKind,
    pub operation_id: Option<String>,
    pub message: String,
}

impl Violation {
    pub fn new(rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            rule,
            operation_id: None,
            message: message.into(),
        }
    }

    /// Attach the offending operation id; an empty id is not recorded
    pub fn with_operation(mut self, operation_id: &str) -> Self {
        self.operation_id = (!operation_id.is_empty()).then(|| operation_id.to_string());
        self
    }

    /// Format as `'<operationId>': <message>`, or the bare message without an id
    pub fn format(&self) -> String {
        match &self.operation_id {
            Some(id) => format!("'{}': {}", id, self.message),
            None => self.message.clone(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}
