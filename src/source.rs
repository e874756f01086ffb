use std::collections::HashMap;
use std::env;

/// Read-only lookup over environment-style key/value pairs.
///
/// The reader never owns the environment; it queries whatever source it is
/// handed. `ProcessEnv` is the source used by [`EnvReader::read`], and a
/// `HashMap<String, String>` works as a source directly, which keeps tests
/// off the process environment.
///
/// [`EnvReader::read`]: crate::EnvReader::read
pub trait EnvSource {
    /// Return the value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset, same as missing keys.
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: EnvSource> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }
}
