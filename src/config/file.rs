//! Provider backed by the per-user configuration file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Provider;

/// Relative path of the config file under the user's home directory.
const CONFIG_FILE_RELATIVE: &str = ".palantir/config";

/// The table whose attributes hold the default configuration values.
const DEFAULT_TABLE: &str = "default";

/// A provider reading a named attribute from the `[default]` table of the
/// per-user configuration file.
///
/// The well-known location is `~/.palantir/config`, a TOML document:
///
/// ```toml
/// [default]
/// hostname = "example.palantirfoundry.com"
/// token = "eyJ..."
/// ontology_rid = "ri.ontology.main.ontology.a0a03652"
/// ```
///
/// Absent when the file, the table, or the attribute is missing, or when the
/// attribute value is empty. The file is re-read on every call, so edits are
/// observed without restarting the process.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    attribute: String,
    path: Option<PathBuf>,
}

impl ConfigFile {
    /// Creates a provider for `attribute` at the well-known location.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            path: None,
        }
    }

    /// Creates a provider reading from an explicit file path instead of
    /// `~/.palantir/config`.
    pub fn with_path(attribute: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            attribute: attribute.into(),
            path: Some(path.into()),
        }
    }

    /// Returns the attribute name this provider reads.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    fn resolved_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(path.clone()),
            None => dirs::home_dir().map(|home| home.join(CONFIG_FILE_RELATIVE)),
        }
    }
}

impl<T: From<String>> Provider<T> for ConfigFile {
    fn get(&self) -> Option<T> {
        let path = self.resolved_path()?;
        read_attribute(&path, &self.attribute).map(T::from)
    }
}

/// Reads one attribute from the `[default]` table of the file at `path`.
///
/// Every missing layer resolves to `None`; an unreadable or unparsable file
/// is logged and treated as absent rather than failing resolution.
fn read_attribute(path: &Path, attribute: &str) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let document: toml::Value = match toml::from_str(&raw) {
        Ok(document) => document,
        Err(err) => {
            warn!(path = %path.display(), %err, "config file is not valid TOML");
            return None;
        }
    };

    let value = document
        .get(DEFAULT_TABLE)?
        .get(attribute)?
        .as_str()
        .filter(|v| !v.is_empty())
        .map(String::from);

    debug!(
        path = %path.display(),
        attribute,
        present = value.is_some(),
        "read config file attribute"
    );
    value
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_present_attribute() {
        let (_dir, path) = write_config(
            "[default]\nhostname = \"example.palantirfoundry.com\"\ntoken = \"tok\"\n",
        );
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, Some("example.palantirfoundry.com".to_string()));
    }

    #[test]
    fn test_missing_attribute() {
        let (_dir, path) = write_config("[default]\nhostname = \"h\"\n");
        let provider = ConfigFile::with_path("ontology_rid", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }

    #[test]
    fn test_missing_default_table() {
        let (_dir, path) = write_config("[other]\nhostname = \"h\"\n");
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = ConfigFile::with_path("hostname", dir.path().join("no-such-file"));
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }

    #[test]
    fn test_empty_attribute_is_absent() {
        let (_dir, path) = write_config("[default]\nhostname = \"\"\n");
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }

    #[test]
    fn test_unparsable_file_is_absent() {
        let (_dir, path) = write_config("this is not { toml");
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }

    #[test]
    fn test_rereads_each_call() {
        let (_dir, path) = write_config("[default]\nhostname = \"first\"\n");
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, Some("first".to_string()));

        std::fs::write(&path, "[default]\nhostname = \"second\"\n").unwrap();
        let value: Option<String> = provider.get();
        assert_eq!(value, Some("second".to_string()));
    }

    #[test]
    fn test_non_string_attribute_is_absent() {
        let (_dir, path) = write_config("[default]\nhostname = 42\n");
        let provider = ConfigFile::with_path("hostname", &path);
        let value: Option<String> = provider.get();
        assert_eq!(value, None);
    }
}
