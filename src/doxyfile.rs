// Doxyfile synthesis
//
// Builds the ordered key/value document Doxygen consumes and writes it
// into the scan root. Settings carry no timestamps and keep a fixed
// order, so the same tree always produces the same bytes.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Well-known filename the generator is pointed at
pub const DOXYFILE_NAME: &str = "Doxyfile";

/// A single setting value in Doxyfile syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free-form text, quoted when it contains whitespace
    Text(String),
    /// Rendered as YES / NO
    Flag(bool),
    /// Space-separated path list with escaped embedded spaces
    Paths(Vec<String>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => {
                if s.contains(char::is_whitespace) {
                    write!(f, "\"{}\"", s)
                } else {
                    write!(f, "{}", s)
                }
            }
            Value::Flag(true) => write!(f, "YES"),
            Value::Flag(false) => write!(f, "NO"),
            Value::Paths(paths) => {
                let escaped: Vec<String> =
                    paths.iter().map(|p| p.replace(' ', "\\ ")).collect();
                write!(f, "{}", escaped.join(" "))
            }
        }
    }
}

/// An ordered Doxygen settings document
#[derive(Debug, Clone, Default)]
pub struct Doxyfile {
    settings: Vec<(String, Value)>,
}

impl Doxyfile {
    /// Build the baseline document from discovered inputs and settings.
    ///
    /// `inputs` and `file_patterns` come pre-sorted from the scanner so the
    /// output is reproducible.
    pub fn synthesize(
        project_name: &str,
        inputs: &[String],
        file_patterns: &[String],
        output_dir: &str,
        generator: &GeneratorConfig,
    ) -> Self {
        let mut doxyfile = Doxyfile::default();

        doxyfile.set("PROJECT_NAME", Value::Text(project_name.to_string()));
        doxyfile.set("OUTPUT_DIRECTORY", Value::Text(output_dir.to_string()));
        doxyfile.set("INPUT", Value::Paths(inputs.to_vec()));
        doxyfile.set("FILE_PATTERNS", Value::Paths(file_patterns.to_vec()));
        doxyfile.set("RECURSIVE", Value::Flag(true));
        doxyfile.set("EXTRACT_ALL", Value::Flag(generator.extract_all));
        doxyfile.set("EXTRACT_PRIVATE", Value::Flag(generator.extract_private));
        doxyfile.set("EXTRACT_STATIC", Value::Flag(generator.extract_static));
        doxyfile.set("GENERATE_HTML", Value::Flag(true));
        doxyfile.set("GENERATE_LATEX", Value::Flag(false));

        doxyfile
    }

    /// Set a value, replacing any existing setting with the same name
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.settings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.settings.push((name, value)),
        }
    }

    /// Look up a setting by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.settings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Render the document in Doxyfile syntax
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.settings {
            let rendered = value.to_string();
            if rendered.is_empty() {
                out.push_str(&format!("{:<23}=\n", name));
            } else {
                out.push_str(&format!("{:<23}= {}\n", name, rendered));
            }
        }
        out
    }

    /// Write the document to `<dir>/Doxyfile`, replacing any existing file
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(DOXYFILE_NAME);
        if path.exists() {
            log::info!("replacing existing {}", path.display());
        }
        std::fs::write(&path, self.render()).map_err(|e| Error::write(&path, e))?;
        Ok(path)
    }
}
