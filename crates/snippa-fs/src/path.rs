//! Normalized path handling for cross-platform consistency

use std::path::{Path, PathBuf};

/// A path stored with forward slashes regardless of platform.
///
/// Snippet identifiers and state paths travel through persisted JSON, so the
/// internal representation must be stable across platforms. Conversion to the
/// platform-native form happens only at I/O boundaries via [`to_native`].
///
/// [`to_native`]: NormalizedPath::to_native
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Build from any path-like input, replacing backslashes with slashes.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: raw.replace('\\', "/"),
        }
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native `PathBuf` for I/O.
    pub fn to_native(&self) -> PathBuf {
        dunce::simplified(Path::new(&self.inner)).to_path_buf()
    }

    /// Append a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }

    /// The final path component, if any.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// The extension of the final component, without the dot.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}
