// Source directory discovery
//
// Walks a source tree and reports the topmost directories that directly
// contain source files. Everything below a reported directory is covered
// by the generator's own recursive scan.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions Doxygen recognizes as source, used when no override is given
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "c", "cc", "cxx", "cpp", "c++", "java", "ii", "ixx", "ipp", "i++", "inl", "idl", "ddl", "odl",
    "h", "hh", "hxx", "hpp", "h++", "l", "cs", "d", "php", "php4", "php5", "phtml", "inc", "m",
    "markdown", "mm", "dox", "py", "pyw", "f90", "f95", "f03", "f08", "f18", "f", "for", "vhd",
    "vhdl", "ucf", "qsf", "ice",
];

/// Well-known non-source directories, skipped regardless of configuration
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "build",
    "dist",
    "__pycache__",
    "vendor",
];

/// Classifies directories under a root as source or not
pub struct Scanner {
    extensions: BTreeSet<String>,
    exclude: Vec<glob::Pattern>,
    skip_dirs: Vec<String>,
}

impl Scanner {
    /// Create a scanner from scan settings and the docs output directory name
    /// (which must never be classified as source).
    pub fn new(config: &ScanConfig, output_dir: &str) -> Result<Self> {
        let extensions = config
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();

        let exclude = config
            .exclude
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut skip_dirs: Vec<String> = SKIP_DIRS.iter().map(|d| d.to_string()).collect();
        skip_dirs.push(output_dir.to_string());

        Ok(Self {
            extensions,
            exclude,
            skip_dirs,
        })
    }

    /// Find the topmost directories under `root` that directly contain
    /// source files, sorted by path.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(Error::InvalidRoot(root.to_path_buf()));
        }

        let mut with_source: BTreeSet<PathBuf> = BTreeSet::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| self.enter(e, root));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_file() && self.is_source_file(entry.path()) {
                if let Some(parent) = entry.path().parent() {
                    with_source.insert(parent.to_path_buf());
                }
            }
        }

        // Keep only directories with no qualifying ancestor.
        let dirs = with_source
            .iter()
            .filter(|dir| !dir.ancestors().skip(1).any(|a| with_source.contains(a)))
            .cloned()
            .collect();

        Ok(dirs)
    }

    /// Whether the walk should descend into this entry
    fn enter(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();

        // Hidden directories cover version-control metadata (.git, .hg, .svn)
        if name.starts_with('.') {
            return false;
        }

        if self.skip_dirs.iter().any(|d| d.as_str() == name.as_ref()) {
            return false;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        !self
            .exclude
            .iter()
            .any(|p| p.matches(&name) || p.matches(&relative))
    }

    /// Whether a file marks its directory as source
    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}

/// Express discovered directories relative to the root with forward
/// slashes, `.` for the root itself.
pub fn relative_inputs(dirs: &[PathBuf], root: &Path) -> Vec<String> {
    dirs.iter()
        .map(|dir| {
            let relative = dir.strip_prefix(root).unwrap_or(dir);
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            }
        })
        .collect()
}

/// Doxygen FILE_PATTERNS form of a configured extension list
pub fn file_patterns(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| format!("*.{}", normalize_extension(e)))
        .collect()
}

/// Lowercase and strip the leading dot, so `.CPP` and `cpp` configure
/// the same extension.
fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner_with(extensions: &[&str], exclude: &[&str]) -> Scanner {
        let config = ScanConfig {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            exclude: exclude.iter().map(|e| e.to_string()).collect(),
        };
        Scanner::new(&config, "doxygen").unwrap()
    }

    #[test]
    fn test_invalid_root() {
        let scanner = scanner_with(&["cpp"], &[]);
        let result = scanner.discover(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(Error::InvalidRoot(_))));
    }

    #[test]
    fn test_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("main.cpp");
        fs::write(&file, "int main() {}").unwrap();

        let scanner = scanner_with(&["cpp"], &[]);
        assert!(matches!(
            scanner.discover(&file),
            Err(Error::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_empty_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/readme.txt"), "hello").unwrap();

        let scanner = scanner_with(&["cpp", "h"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert!(dirs.is_empty());
    }

    #[test]
    fn test_classifies_source_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.cpp"), "").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/readme.txt"), "").unwrap();

        let scanner = scanner_with(&["cpp", "h"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().join("src")]);
    }

    #[test]
    fn test_root_itself_qualifies() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.c"), "").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/util.c"), "").unwrap();

        let scanner = scanner_with(&["c"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        // lib is below the qualifying root, so only the root is reported
        assert_eq!(dirs, vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn test_topmost_directory_wins() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/x.c"), "").unwrap();
        fs::write(dir.path().join("a/b/y.c"), "").unwrap();
        fs::create_dir_all(dir.path().join("c/d")).unwrap();
        fs::write(dir.path().join("c/d/z.c"), "").unwrap();

        let scanner = scanner_with(&["c"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().join("a"), dir.path().join("c/d")]);
    }

    #[test]
    fn test_skips_hidden_and_wellknown_dirs() {
        let dir = TempDir::new().unwrap();
        for skipped in [".git", "node_modules", "doxygen"] {
            fs::create_dir(dir.path().join(skipped)).unwrap();
            fs::write(dir.path().join(skipped).join("x.c"), "").unwrap();
        }
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.c"), "").unwrap();

        let scanner = scanner_with(&["c"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().join("src")]);
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("third_party")).unwrap();
        fs::write(dir.path().join("third_party/lib.c"), "").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.c"), "").unwrap();

        let scanner = scanner_with(&["c"], &["third_party"]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs, vec![dir.path().join("src")]);
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/LEGACY.CPP"), "").unwrap();

        let scanner = scanner_with(&["cpp"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn test_extension_with_leading_dot() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/a.cpp"), "").unwrap();

        let scanner = scanner_with(&[".cpp"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn test_output_sorted_by_path() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir(dir.path().join(name)).unwrap();
            fs::write(dir.path().join(name).join("x.c"), "").unwrap();
        }

        let scanner = scanner_with(&["c"], &[]);
        let dirs = scanner.discover(dir.path()).unwrap();
        assert_eq!(
            dirs,
            vec![
                dir.path().join("alpha"),
                dir.path().join("mid"),
                dir.path().join("zeta"),
            ]
        );
    }

    #[test]
    fn test_relative_inputs() {
        let root = Path::new("/project");
        let dirs = vec![
            PathBuf::from("/project"),
            PathBuf::from("/project/src/core"),
        ];
        assert_eq!(
            relative_inputs(&dirs, root),
            vec![".".to_string(), "src/core".to_string()]
        );
    }

    #[test]
    fn test_file_patterns() {
        let extensions = vec![".CPP".to_string(), "h".to_string()];
        assert_eq!(
            file_patterns(&extensions),
            vec!["*.cpp".to_string(), "*.h".to_string()]
        );
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".CPP"), "cpp");
        assert_eq!(normalize_extension("h"), "h");
        assert_eq!(normalize_extension(".f90"), "f90");
    }
}
