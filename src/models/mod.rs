pub mod swagger;

pub use swagger::{Code, Operation, Parameter, PathItem, Resource, Response, Schema, Swagger, Verb};
