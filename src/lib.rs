pub mod error;
pub mod field;
pub mod reader;
pub mod source;

// Re-export main types
pub use error::ReadError;
pub use field::{EnvRecord, Field, FieldValue};
pub use reader::{DEFAULT_TAG, EnvReader, KEY_TAG};
pub use source::{EnvSource, ProcessEnv};

// Re-export derive macro
pub use envreadr_macros::EnvRecord;
