pub mod error;
pub mod value;

pub use error::{LogError, Result};
pub use value::Value;
