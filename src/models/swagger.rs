use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A path template such as `/items/{id}`
pub type Resource = String;

/// An HTTP method token such as `get` or `post`
pub type Verb = String;

/// Decode an explicit `null` the same way as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Swagger 2.0 document root, reduced to the parts the linter inspects
/// https://swagger.io/specification/v2/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Swagger {
    /// Resources keyed by path template
    #[serde(default, deserialize_with = "null_as_default")]
    pub paths: BTreeMap<Resource, PathItem>,
}

impl Swagger {
    pub fn with_path(mut self, resource: impl Into<Resource>, item: PathItem) -> Self {
        self.paths.insert(resource.into(), item);
        self
    }

    /// Total number of (resource, verb) pairs in the document
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations.len()).sum()
    }
}

/// Operations available on a single resource, keyed by verb.
///
/// Path-level `parameters`, `$ref` and `x-*` extension keys share the map with
/// the verbs in Swagger; they are skipped while decoding.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    pub operations: BTreeMap<Verb, Operation>,
}

impl PathItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, verb: impl Into<Verb>, operation: Operation) -> Self {
        self.operations.insert(verb.into(), operation);
        self
    }

    fn is_operation_key(key: &str) -> bool {
        key != "parameters" && key != "$ref" && !key.starts_with("x-")
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of HTTP verbs to operations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut operations = BTreeMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if PathItem::is_operation_key(&key) {
                        let operation = map.next_value::<Option<Operation>>()?;
                        operations.insert(key, operation.unwrap_or_default());
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }

                Ok(PathItem { operations })
            }
        }

        deserializer.deserialize_map(PathItemVisitor)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Grouping tags, expected to hold at least one entry
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Unique operation identifier (empty when absent)
    #[serde(default, rename = "operationId", deserialize_with = "null_as_default")]
    pub operation_id: String,

    /// Declared parameters, in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,

    /// Responses keyed by status code
    #[serde(default, deserialize_with = "null_as_default")]
    pub responses: BTreeMap<Code, Response>,
}

impl Operation {
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            ..Self::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_response(mut self, code: impl Into<Code>, response: Response) -> Self {
        self.responses.insert(code.into(), response);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// The location of the parameter (body, query, path, header, formData)
    #[serde(default, rename = "in", deserialize_with = "null_as_default")]
    pub location: String,

    /// The name of the parameter
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Body parameters carry a schema
    #[serde(default)]
    pub schema: Option<Schema>,
}

impl Parameter {
    pub fn body(schema_ref: impl Into<String>) -> Self {
        Self {
            location: "body".to_string(),
            name: "body".to_string(),
            schema: Some(Schema::reference(schema_ref)),
        }
    }

    pub fn query(name: impl Into<String>) -> Self {
        Self {
            location: "query".to_string(),
            name: name.into(),
            schema: None,
        }
    }

    pub fn schema_ref(&self) -> &str {
        self.schema.as_ref().map_or("", Schema::reference_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub schema: Option<Schema>,
}

impl Response {
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
        }
    }

    pub fn schema_type(&self) -> &str {
        self.schema
            .as_ref()
            .and_then(|s| s.schema_type.as_deref())
            .unwrap_or("")
    }

    pub fn schema_ref(&self) -> &str {
        self.schema.as_ref().map_or("", Schema::reference_str)
    }

    /// Reference of the element model for array responses
    pub fn items_ref(&self) -> &str {
        self.schema
            .as_ref()
            .and_then(|s| s.items.as_deref())
            .map_or("", Schema::reference_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "type")]
    pub schema_type: Option<String>,

    #[serde(default, rename = "$ref")]
    pub reference: Option<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }

    pub fn array_of(items_ref: impl Into<String>) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(Schema::reference(items_ref))),
            ..Self::default()
        }
    }

    fn reference_str(&self) -> &str {
        self.reference.as_deref().unwrap_or("")
    }
}

/// Response status code as written in the document (`"200"`, `"default"`).
///
/// YAML documents may spell codes as bare integers; those are kept as their
/// decimal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(String);

impl Code {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 2xx family, judged on the textual form only
    pub fn is_success(&self) -> bool {
        self.0.starts_with('2')
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Code(value.to_string())
    }
}

impl From<String> for Code {
    fn from(value: String) -> Self {
        Code(value)
    }
}

impl From<u16> for Code {
    fn from(value: u16) -> Self {
        Code(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = Code;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a response status code")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Code, E> {
                Ok(Code(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<Code, E> {
                Ok(Code(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Code, E> {
                Ok(Code(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Code, E> {
                Ok(Code(value.to_string()))
            }
        }

        deserializer.deserialize_any(CodeVisitor)
    }
}
