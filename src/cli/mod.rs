//! CLI module for Doxyprep

mod args;

pub use args::{Args, Command};

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::doxyfile::{Doxyfile, DOXYFILE_NAME};
use crate::error::{Error, Result};
use crate::gitignore::{self, GITIGNORE_NAME};
use crate::runner;
use crate::scan::{self, Scanner};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                Error::GeneratorFailed { code } => exit_code_from(code),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            path,
            output,
            extensions,
            exclude,
            config,
            no_gitignore,
            no_run,
            verbose,
        } => generate(
            path,
            output,
            extensions,
            exclude,
            config,
            no_gitignore,
            no_run,
            verbose,
        ),

        Command::Version => {
            println!("doxyprep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn generate(
    path: PathBuf,
    output: Option<String>,
    extensions: Vec<String>,
    exclude: Vec<String>,
    config: Option<PathBuf>,
    no_gitignore: bool,
    no_run: bool,
    verbose: bool,
) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::InvalidRoot(path));
    }

    // Load config file if it exists
    let mut cfg = if let Some(config_path) = &config {
        Config::load(config_path)?
    } else {
        Config::load_or_default(&path.join(CONFIG_FILE_NAME))
    };

    // Merge CLI arguments (CLI takes precedence)
    cfg.merge_cli(output, extensions, exclude);
    cfg.validate()?;

    if verbose {
        println!("Scanning: {}", path.display());
        println!("Output directory: {}", cfg.output.directory);
        println!("Extensions: {:?}", cfg.scan.extensions);
        if !cfg.scan.exclude.is_empty() {
            println!("Excludes: {:?}", cfg.scan.exclude);
        }
    }

    let scanner = Scanner::new(&cfg.scan, &cfg.output.directory)?;
    let dirs = scanner.discover(&path)?;
    let inputs = scan::relative_inputs(&dirs, &path);

    if inputs.is_empty() {
        println!("No source directories found; writing a minimal Doxyfile");
    } else {
        println!("Found {} source directories", inputs.len());
        if verbose {
            for input in &inputs {
                println!("  {}", input);
            }
        }
    }

    let project_name = cfg
        .project
        .name
        .clone()
        .unwrap_or_else(|| project_name_from(&path));

    let patterns = scan::file_patterns(&cfg.scan.extensions);
    let doxyfile = Doxyfile::synthesize(
        &project_name,
        &inputs,
        &patterns,
        &cfg.output.directory,
        &cfg.generator,
    );

    let doxyfile_path = path.join(DOXYFILE_NAME);
    let replacing = doxyfile_path.exists();
    doxyfile.write_to(&path)?;
    if replacing {
        println!("Replaced existing {}", doxyfile_path.display());
    } else {
        println!("Doxyfile written to: {}", doxyfile_path.display());
    }

    if !no_gitignore {
        let output_entry = format!("{}/", cfg.output.directory);
        let added = gitignore::ensure_entries(
            &path.join(GITIGNORE_NAME),
            &[DOXYFILE_NAME, output_entry.as_str()],
        )?;
        if !added.is_empty() {
            println!("Added to {}: {}", GITIGNORE_NAME, added.join(", "));
        } else if verbose {
            println!("{} already up to date", GITIGNORE_NAME);
        }
    }

    if !no_run {
        println!("Running {}...", cfg.generator.command);
        runner::run_generator(
            &path,
            &cfg.generator.command,
            DOXYFILE_NAME,
            &cfg.output.directory,
        )?;
        println!(
            "Documentation generated in {}",
            path.join(&cfg.output.directory).display()
        );
    }

    Ok(())
}

/// Default project name: the root directory's own name
fn project_name_from(path: &Path) -> String {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    canonical
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Untitled Project")
        .to_string()
}

/// Map the generator's exit status onto our own where it fits
fn exit_code_from(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) if code != 0 => ExitCode::from(code),
        _ => ExitCode::FAILURE,
    }
}
