//! Binding names and paths
//!
//! The hosting runtime hands the queue sample its data as file paths in
//! environment variables. The variable names are fixed by the host.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::BindingError;

/// Environment variable holding the path of the queue message file
pub const INPUT_VAR: &str = "input";

/// Environment variable holding the path of the table entities file
pub const TABLE_INPUT_VAR: &str = "tableInput";

/// Environment variable holding the path the output binding is written to
pub const OUTPUT_VAR: &str = "output";

/// Resolved file paths for one queue-trigger invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingPaths {
    /// Queue message file
    pub input: PathBuf,

    /// Table entities file (JSON array of objects)
    pub table_input: PathBuf,

    /// Output binding file
    pub output: PathBuf,
}

impl BindingPaths {
    pub fn new(
        input: impl Into<PathBuf>,
        table_input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            table_input: table_input.into(),
            output: output.into(),
        }
    }

    /// Resolves binding paths through a variable lookup
    ///
    /// The lookup returns `None` for unset variables. Empty values are
    /// treated as unset. Values are used as paths without any re-encoding.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BindingError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let resolve = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .ok_or(BindingError::MissingVariable(name))
        };

        Ok(Self {
            input: resolve(INPUT_VAR)?,
            table_input: resolve(TABLE_INPUT_VAR)?,
            output: resolve(OUTPUT_VAR)?,
        })
    }

    /// Resolves binding paths from the process environment
    pub fn from_env() -> Result<Self, BindingError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_resolves_all_paths() {
        let paths = BindingPaths::from_lookup(lookup_from(&[
            ("input", "/bindings/input"),
            ("tableInput", "/bindings/table.json"),
            ("output", "/bindings/output"),
        ]))
        .unwrap();

        assert_eq!(
            paths,
            BindingPaths::new("/bindings/input", "/bindings/table.json", "/bindings/output")
        );
    }

    #[test]
    fn test_missing_variable_is_named() {
        let err = BindingPaths::from_lookup(lookup_from(&[
            ("input", "/bindings/input"),
            ("output", "/bindings/output"),
        ]))
        .unwrap_err();

        assert!(matches!(err, BindingError::MissingVariable("tableInput")));
        assert!(err.to_string().contains("tableInput"));
    }

    #[test]
    fn test_empty_variable_counts_as_missing() {
        let err = BindingPaths::from_lookup(lookup_from(&[
            ("input", ""),
            ("tableInput", "/bindings/table.json"),
            ("output", "/bindings/output"),
        ]))
        .unwrap_err();

        assert!(matches!(err, BindingError::MissingVariable("input")));
    }

    #[test]
    fn test_variable_names_are_case_sensitive() {
        let err = BindingPaths::from_lookup(lookup_from(&[
            ("INPUT", "/bindings/input"),
            ("TABLEINPUT", "/bindings/table.json"),
            ("OUTPUT", "/bindings/output"),
        ]))
        .unwrap_err();

        assert!(matches!(err, BindingError::MissingVariable("input")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_paths_pass_through_unchanged() {
        use std::os::unix::ffi::OsStringExt;

        let input = OsString::from_vec(b"/bindings/queue_\xff_input".to_vec());
        let expected = input.clone();
        let paths = BindingPaths::from_lookup(move |name| match name {
            INPUT_VAR => Some(input.clone()),
            TABLE_INPUT_VAR => Some(OsString::from("/bindings/table.json")),
            OUTPUT_VAR => Some(OsString::from("/bindings/output")),
            _ => None,
        })
        .unwrap();

        assert_eq!(paths.input.into_os_string(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_reads_process_environment() {
        use std::os::unix::ffi::OsStringExt;

        let input = OsString::from_vec(b"/bindings/env_\xff_input".to_vec());
        // SAFETY: this is the only test in the crate touching the environment.
        unsafe {
            std::env::set_var(INPUT_VAR, &input);
            std::env::set_var(TABLE_INPUT_VAR, "/bindings/table.json");
            std::env::set_var(OUTPUT_VAR, "/bindings/output");
        }

        let paths = BindingPaths::from_env().unwrap();

        assert_eq!(paths.input.as_os_str(), input.as_os_str());
        assert_eq!(paths.table_input, PathBuf::from("/bindings/table.json"));
        assert_eq!(paths.output, PathBuf::from("/bindings/output"));
    }
}
