// External generator invocation
//
// Thin boundary around the doxygen process: supply the config file,
// pass streams through, surface the exit status. No generation logic
// lives here.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Run the generator against a written Doxyfile.
///
/// The output directory is created first since doxygen expects
/// OUTPUT_DIRECTORY to exist. Stdout and stderr are inherited so the
/// generator's own diagnostics reach the user unmodified.
pub fn run_generator(root: &Path, command: &str, doxyfile: &str, output_dir: &str) -> Result<()> {
    let out = root.join(output_dir);
    std::fs::create_dir_all(&out).map_err(|e| Error::write(&out, e))?;

    log::debug!("running {} {} in {}", command, doxyfile, root.display());

    let status = Command::new(command)
        .arg(doxyfile)
        .current_dir(root)
        .status()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::GeneratorNotFound(command.to_string()),
            _ => Error::Io(e),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::GeneratorFailed {
            code: status.code().unwrap_or(1),
        })
    }
}
