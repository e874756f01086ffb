use colored::Colorize;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while reading a record.
///
/// Only scalar integer and float fields can fail; every other coercion is
/// total. List elements that fail to parse are absorbed as zero values and
/// never reach the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadError {
    /// A scalar integer field received text that does not parse at its
    /// declared width (malformed or out of range)
    InvalidInt {
        field: &'static str,
        key: String,
        value: String,
        source: ParseIntError,
    },
    /// A scalar float field received non-numeric text
    InvalidFloat {
        field: &'static str,
        key: String,
        value: String,
        source: ParseFloatError,
    },
}

impl ReadError {
    /// Headline subject for display: the environment variable name when
    /// the field has one, otherwise the field name.
    fn subject(&self) -> &str {
        let (field, key) = match self {
            ReadError::InvalidInt { field, key, .. } => (field, key),
            ReadError::InvalidFloat { field, key, .. } => (field, key),
        };
        if key.is_empty() { field } else { key }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::InvalidInt {
                field,
                value,
                source,
                ..
            } => {
                writeln!(
                    f,
                    "{}: Invalid integer {}",
                    self.subject().magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                writeln!(f, "\tField: {}", field)?;
                write!(f, "\tCause: {}", source)
            }
            ReadError::InvalidFloat {
                field,
                value,
                source,
                ..
            } => {
                writeln!(
                    f,
                    "{}: Invalid float {}",
                    self.subject().magenta().bold(),
                    format!("'{}'", value).red(),
                )?;
                writeln!(f, "\tField: {}", field)?;
                write!(f, "\tCause: {}", source)
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::InvalidInt { source, .. } => Some(source),
            ReadError::InvalidFloat { source, .. } => Some(source),
        }
    }
}
