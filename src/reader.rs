use crate::error::ReadError;
use crate::field::{EnvRecord, FieldValue};
use crate::source::{EnvSource, ProcessEnv};
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// Default tag name for the environment variable lookup key
pub const KEY_TAG: &str = "env";
/// Default tag name for the fallback literal text
pub const DEFAULT_TAG: &str = "default";

/// Reads environment values into a record, field by field.
///
/// The reader holds only its two tag names and no per-read state, so one
/// instance can be reused against any number of records. Tag names can be
/// changed between reads; a change never affects a read already in flight
/// because `read` takes `&self`.
///
/// # Example
/// ```no_run
/// use envreadr::{EnvReader, EnvRecord};
///
/// #[derive(Default, EnvRecord)]
/// struct Config {
///     #[field(env = "LISTEN_HOST", default = "127.0.0.1")]
///     listen_host: String,
///     #[field(env = "LISTEN_PORT", default = "5000")]
///     listen_port: String,
/// }
///
/// let mut config = Config::default();
/// EnvReader::new().read(&mut config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct EnvReader {
    key_tag: String,
    default_tag: String,
}

impl EnvReader {
    /// Create a reader with the default tag names, `env` and `default`.
    pub fn new() -> Self {
        Self {
            key_tag: KEY_TAG.to_string(),
            default_tag: DEFAULT_TAG.to_string(),
        }
    }

    /// Override the tag name used to find each field's environment
    /// variable name. Takes effect on the next read.
    pub fn set_key_tag(&mut self, name: impl Into<String>) {
        self.key_tag = name.into();
    }

    /// Override the tag name used to find each field's fallback text.
    /// Takes effect on the next read.
    pub fn set_default_tag(&mut self, name: impl Into<String>) {
        self.default_tag = name.into();
    }

    /// Current lookup-key tag name.
    pub fn key_tag(&self) -> &str {
        &self.key_tag
    }

    /// Current default tag name.
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Read the process environment into `record`.
    ///
    /// Fields are processed in declaration order and assigned as they
    /// resolve. On the first scalar parse failure the error is returned
    /// immediately: fields before the failing one keep their new values,
    /// fields after it are untouched. There is no rollback.
    pub fn read<R: EnvRecord>(&self, record: &mut R) -> Result<(), ReadError> {
        self.read_from(&ProcessEnv, record)
    }

    /// Read an arbitrary [`EnvSource`] into `record`. Same algorithm and
    /// same partial-mutation contract as [`read`](Self::read).
    pub fn read_from<R: EnvRecord>(
        &self,
        env: &impl EnvSource,
        record: &mut R,
    ) -> Result<(), ReadError> {
        for field in record.fields() {
            let key = field.tag(&self.key_tag);
            let fallback = field.tag(&self.default_tag);
            let raw = resolve(env, key, fallback);

            // Nothing in the environment and no usable default: the field
            // keeps whatever value it already holds.
            if raw.trim().is_empty() {
                continue;
            }

            coerce(field.name, key, &raw, field.value)?;
        }
        Ok(())
    }
}

impl Default for EnvReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment value for `key`, unless it is unset or whitespace-only, in
/// which case the tag's literal `fallback` text stands in for it.
fn resolve(env: &impl EnvSource, key: &str, fallback: &str) -> String {
    match env.get(key) {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Coerce `raw` into the field's declared type.
///
/// Scalar integer and float failures are fatal to the whole read. List
/// elements that fail to parse are absorbed as the element type's zero
/// value, keeping their slot; this scalar-fatal/list-tolerant asymmetry is
/// a compatibility contract, not an oversight.
fn coerce(
    name: &'static str,
    key: &str,
    raw: &str,
    value: FieldValue<'_>,
) -> Result<(), ReadError> {
    match value {
        FieldValue::Bool(v) => *v = raw == "1" || raw.eq_ignore_ascii_case("true"),
        FieldValue::I8(v) => *v = parse_int(name, key, raw)?,
        FieldValue::I16(v) => *v = parse_int(name, key, raw)?,
        FieldValue::I32(v) => *v = parse_int(name, key, raw)?,
        FieldValue::I64(v) => *v = parse_int(name, key, raw)?,
        FieldValue::F32(v) => *v = parse_float(name, key, raw)?,
        FieldValue::F64(v) => *v = parse_float(name, key, raw)?,
        FieldValue::Str(v) => *v = raw.to_string(),
        FieldValue::StrList(v) => *v = split_segments(raw),
        FieldValue::IntList(v) => {
            *v = split_segments(raw)
                .iter()
                .map(|s| s.parse().unwrap_or(0))
                .collect();
        }
        FieldValue::F32List(v) => {
            *v = split_segments(raw)
                .iter()
                .map(|s| s.parse().unwrap_or(0.0))
                .collect();
        }
        FieldValue::F64List(v) => {
            *v = split_segments(raw)
                .iter()
                .map(|s| s.parse().unwrap_or(0.0))
                .collect();
        }
    }
    Ok(())
}

fn parse_int<T>(field: &'static str, key: &str, raw: &str) -> Result<T, ReadError>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse().map_err(|source| ReadError::InvalidInt {
        field,
        key: key.to_string(),
        value: raw.to_string(),
        source,
    })
}

fn parse_float<T>(field: &'static str, key: &str, raw: &str) -> Result<T, ReadError>
where
    T: FromStr<Err = ParseFloatError>,
{
    raw.parse().map_err(|source| ReadError::InvalidFloat {
        field,
        key: key.to_string(),
        value: raw.to_string(),
        source,
    })
}

/// Strip every ASCII space from the whole string, then split on commas.
/// Empty segments from consecutive commas are kept.
fn split_segments(raw: &str) -> Vec<String> {
    raw.replace(' ', "")
        .split(',')
        .map(str::to_string)
        .collect()
}
