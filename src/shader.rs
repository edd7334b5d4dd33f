//! Shader source loading
//!
//! The vertex and fragment shaders are plain WGSL text files read from disk
//! at startup. A missing or unreadable file is a fatal startup error; the
//! source text itself is validated by wgpu when the pipeline is created.

use std::fs;
use std::io;
use std::fmt;
use std::path::{Path, PathBuf};

/// A shader source file loaded from disk
#[derive(Debug, Clone)]
pub struct ShaderSource {
    /// Path the source was loaded from (used for module labels)
    pub path: PathBuf,
    /// WGSL source text
    pub source: String,
}

impl ShaderSource {
    /// Read a shader source file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ShaderError::NotFound(path.display().to_string())
            } else {
                ShaderError::Io(e)
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Label for the wgpu shader module, derived from the file name
    pub fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Error type for shader loading
#[derive(Debug)]
pub enum ShaderError {
    /// Shader file does not exist
    NotFound(String),
    /// IO error (permission denied, invalid UTF-8, etc.)
    Io(io::Error),
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::NotFound(path) => write!(f, "Shader file not found: {}", path),
            ShaderError::Io(err) => write!(f, "Shader IO error: {}", err),
        }
    }
}

impl std::error::Error for ShaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShaderError::NotFound(_) => None,
            ShaderError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShaderError {
    fn from(err: io::Error) -> Self {
        ShaderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_shader_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wgpu_triangle_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_reads_file_contents() {
        let path = temp_shader_path("vs.wgsl");
        fs::write(&path, "@vertex fn vs_main() {}").unwrap();

        let shader = ShaderSource::load(&path).unwrap();
        assert_eq!(shader.source, "@vertex fn vs_main() {}");
        assert_eq!(shader.path, path);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShaderSource::load("no/such/shader.wgsl").unwrap_err();
        match err {
            ShaderError::NotFound(path) => assert!(path.contains("shader.wgsl")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_label_uses_file_name() {
        let shader = ShaderSource {
            path: PathBuf::from("shaders/triangle.vert.wgsl"),
            source: String::new(),
        };
        assert_eq!(shader.label(), "triangle.vert.wgsl");
    }

    #[test]
    fn test_not_found_display() {
        let err = ShaderError::NotFound("shaders/missing.wgsl".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("shaders/missing.wgsl"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ShaderError::Io(io_err);
        assert!(err.source().is_some());

        let not_found = ShaderError::NotFound("path".to_string());
        assert!(not_found.source().is_none());
    }
}
