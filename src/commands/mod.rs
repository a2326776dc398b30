pub mod validate;

pub use validate::execute_validate;
