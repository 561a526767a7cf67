use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file looked up in the scan root
pub const CONFIG_FILE_NAME: &str = "doxyprep.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
    pub generator: GeneratorConfig,
}

/// Project metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name for the generated Doxyfile.
    /// Falls back to the root directory name when unset.
    pub name: Option<String>,
}

/// Scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions that mark a directory as source
    pub extensions: Vec<String>,
    /// Glob patterns for directories to skip
    pub exclude: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Name of the docs output directory, relative to the root
    pub directory: String,
}

/// External generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Command used to invoke the generator
    pub command: String,
    /// Document members with no doc comment
    pub extract_all: bool,
    /// Document private members
    pub extract_private: bool,
    /// Document static members
    pub extract_static: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: crate::scan::DEFAULT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            exclude: vec![],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "doxygen".to_string(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: "doxygen".to_string(),
            extract_all: true,
            extract_private: false,
            extract_static: false,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<String>,
        extensions: Vec<String>,
        exclude: Vec<String>,
    ) {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if !extensions.is_empty() {
            self.scan.extensions = extensions;
        }

        if !exclude.is_empty() {
            self.scan.exclude.extend(exclude);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            return Err(Error::config_validation(
                "at least one source extension required",
            ));
        }

        if self.output.directory.is_empty() {
            return Err(Error::config_validation("output directory must be set"));
        }

        if self.output.directory.contains(['/', '\\']) || self.output.directory.starts_with('.') {
            return Err(Error::config_validation(
                "output directory must be a plain name inside the root",
            ));
        }

        if self.generator.command.is_empty() {
            return Err(Error::config_validation("generator command must be set"));
        }

        Ok(())
    }
}
