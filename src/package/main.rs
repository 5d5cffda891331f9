use clap::Parser;
use colored::Colorize;
use devkit::error::BuildError;
use devkit::packaging::{package, package_version, CargoBundler, PackageSpec};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Builds a single-file release executable of devkit into ./dist
#[derive(Parser, Debug)]
#[command(name = "devkit-package", version, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DEVKIT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let spec = PackageSpec::discover(&root, &package_version(&root));
    println!("Building {}...", spec.exe_name);

    match package(&spec, &CargoBundler::new()) {
        Ok(exe) => {
            println!("\n{} exe-path: {}", "Success!".green(), exe.display());
            println!("{}", "Build succeeded!".green());
            ExitCode::SUCCESS
        }
        Err(BuildError::MissingIcon(icon)) => {
            eprintln!("{} icon file '{}' doesn't exist.", "Error:".red(), icon.display());
            eprintln!("Create an assets folder in the project root and place the icon inside.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("\n{} {}", "Build failed:".red(), e);
            eprintln!("{}", "Build failed, cleaned up all generated files".red());
            ExitCode::FAILURE
        }
    }
}
