pub mod swagger;

pub use swagger::{DocumentFormat, load_swagger, parse_swagger};
