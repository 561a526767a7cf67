//! Doxyprep - Prepare and run Doxygen for source trees
//!
//! Scans a directory for source code, writes a Doxyfile pointing at the
//! discovered directories, keeps `.gitignore` aware of the generated
//! artifacts, and invokes doxygen.

pub mod cli;
pub mod config;
pub mod doxyfile;
pub mod error;
pub mod gitignore;
pub mod runner;
pub mod scan;

// Re-export main types
pub use config::Config;
pub use doxyfile::{Doxyfile, Value, DOXYFILE_NAME};
pub use error::{Error, Result};
pub use scan::Scanner;
