/// A mutable binding to one record field, tagged with its declared type.
///
/// The variant set is closed: a record can only expose values the reader
/// knows how to coerce, which keeps the coercion match exhaustive.
#[derive(Debug)]
pub enum FieldValue<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Str(&'a mut String),
    StrList(&'a mut Vec<String>),
    IntList(&'a mut Vec<i64>),
    F32List(&'a mut Vec<f32>),
    F64List(&'a mut Vec<f64>),
}

/// One declared field of a record: its name, its tag metadata, and a
/// mutable binding to the value the reader fills in.
///
/// Tags are verbatim `(name, value)` string pairs. The reader resolves the
/// environment variable name and the fallback text by looking up its
/// currently configured tag names, so records can carry tags under any
/// name, not just `env` and `default`.
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name in the record, used in error reporting
    pub name: &'static str,
    /// Declared metadata, in attribute order
    pub tags: &'static [(&'static str, &'static str)],
    /// Where the coerced value goes
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Look up a tag value by name. Absent tags resolve to `""`.
    pub fn tag(&self, name: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| *value)
            .unwrap_or("")
    }
}

/// A record whose fields can be filled from the environment.
///
/// Usually implemented with `#[derive(EnvRecord)]`, but can be written by
/// hand for records the derive cannot express. `fields` must yield fields
/// in declaration order; the reader processes them in that order and stops
/// at the first scalar parse failure.
pub trait EnvRecord {
    fn fields(&mut self) -> Vec<Field<'_>>;
}
