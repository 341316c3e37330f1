//! Sample manifests
//!
//! The files under `tests/fixtures` are real-world shaped bnd files and jar manifests. Tests that
//! are about whole files should read them through [ManifestSources] rather than embedding copies.

use std::fs;
use std::io;
use std::path::PathBuf;

pub struct ManifestSources;

impl ManifestSources {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn path(name: &str) -> PathBuf {
        Self::dir().join(name)
    }

    pub fn get_string(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::path(name))
    }

    /// Names of all fixture files, sorted
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_listed() {
        let names = ManifestSources::list().unwrap();
        assert!(names.contains(&"portlet.bnd".to_string()));
        assert!(names.contains(&"MANIFEST.MF".to_string()));
    }

    #[test]
    fn test_get_string() {
        let source = ManifestSources::get_string("portlet.bnd").unwrap();
        assert!(source.starts_with("Bundle-Name:"));
    }
}
