use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ScriptError;
use crate::script::{extract_selections, Selection};

/// A selection script read from disk
#[derive(Debug, Clone)]
pub struct ScriptSource {
    path: PathBuf,
    text: String,
}

impl ScriptSource {
    /// Read a script as UTF-8 text
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ScriptError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!("Read {} bytes from {:?}", text.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// All selections in the script, in source order
    pub fn selections(&self) -> Result<Vec<Selection>, ScriptError> {
        extract_selections(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_and_extract() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cut.vdscript");
        std::fs::write(&path, "VirtualDub.subset.AddRange(446,444);\n").unwrap();

        let source = ScriptSource::load(&path).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert!(source.text().ends_with("(446,444);\n"));
        assert_eq!(source.selections().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = ScriptSource::load(dir.path().join("missing.vdscript")).unwrap_err();
        assert!(matches!(err, ScriptError::ReadFailed { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.vdscript");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        assert!(matches!(
            ScriptSource::load(&path),
            Err(ScriptError::ReadFailed { .. })
        ));
    }
}
