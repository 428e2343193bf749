use std::path::Path;

use crate::error::{CsvGuardError, Result};

use super::model::TemplateDefinition;
use super::rule::Template;

/// On-disk encoding of a template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Toml,
    Json,
}

impl TemplateFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Deserialize template content in this format.
    ///
    /// # Errors
    /// Returns a TOML or JSON parse error.
    pub fn parse(self, content: &str) -> Result<TemplateDefinition> {
        match self {
            Self::Toml => Ok(toml::from_str(content)?),
            Self::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Trait for loading templates from the configuration store.
pub trait TemplateLoader {
    /// Read and deserialize a template file without compiling it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_definition(&self, path: &Path) -> Result<TemplateDefinition>;

    /// Read, deserialize and compile a template file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or a
    /// [`crate::TemplateError`] if a rule is invalid.
    fn load(&self, path: &Path) -> Result<Template> {
        let def = self.load_definition(path)?;
        Ok(Template::from_definition(&def)?)
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Loads TOML or JSON template files.
#[derive(Debug)]
pub struct FileTemplateLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileTemplateLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTemplateLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileTemplateLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> TemplateLoader for FileTemplateLoader<F> {
    fn load_definition(&self, path: &Path) -> Result<TemplateDefinition> {
        if !self.fs.exists(path) {
            return Err(CsvGuardError::Config(format!(
                "Template file not found: {}",
                path.display()
            )));
        }

        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| CsvGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        TemplateFormat::from_path(path).parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
