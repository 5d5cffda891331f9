//! # Packaging
//!
//! Produces a single release executable under `dist/`, named after the
//! configured version, with the icon and language resources copied next to it.
//!
//! The external build tool sits behind the [`Bundler`] trait. [`package`]
//! owns the surrounding contract: the icon must exist before anything is
//! touched, stale artifacts are removed first, and any failure removes every
//! partial artifact before the error is returned.

use crate::config::{AppConfig, CONFIG_FILENAME};
use crate::error::BuildError;
use std::env::consts::EXE_SUFFIX;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

const APP_NAME: &str = "DevKit";
const BIN_NAME: &str = "devkit";
const BUILD_DIR: &str = "build";
const DIST_DIR: &str = "dist";
const ASSETS_DIR: &str = "assets";
const RESOURCE_DIR: &str = "i18n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub root: PathBuf,
    pub exe_name: String,
    pub icon: PathBuf,
    pub resources: Option<PathBuf>,
    pub build_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl PackageSpec {
    /// Standard layout under `root`: `assets/head.ico` on Windows,
    /// `assets/head.png` elsewhere, and `i18n/` when present.
    pub fn discover(root: &Path, version: &str) -> Self {
        let icon_name = if cfg!(windows) { "head.ico" } else { "head.png" };
        let resources = root.join(RESOURCE_DIR);
        Self {
            root: root.to_path_buf(),
            exe_name: format!("{}_v{}{}", APP_NAME, file_safe(version), EXE_SUFFIX),
            icon: root.join(ASSETS_DIR).join(icon_name),
            resources: resources.is_dir().then_some(resources),
            build_dir: root.join(BUILD_DIR),
            dist_dir: root.join(DIST_DIR),
        }
    }

    pub fn exe_path(&self) -> PathBuf {
        self.dist_dir.join(&self.exe_name)
    }
}

/// The version is free-form text; anything that could leave `dist/` becomes `_`.
fn file_safe(version: &str) -> String {
    let safe: String = version
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if safe != version {
        warn!(version, exe_version = %safe, "version has characters unfit for a file name");
    }
    safe
}

/// Version for the executable name: `config.json` under `root`, else the crate version.
pub fn package_version(root: &Path) -> String {
    let config = AppConfig::load_or_default(root);
    if config.version == AppConfig::default().version {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        config.version
    }
}

/// The external tool that compiles the executable into `spec.exe_path()`.
pub trait Bundler {
    fn bundle(&self, spec: &PackageSpec) -> Result<(), BuildError>;
}

/// Builds with `cargo build --release` into the spec's build directory.
pub struct CargoBundler {
    cargo: OsString,
}

impl CargoBundler {
    pub fn new() -> Self {
        Self {
            cargo: std::env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo")),
        }
    }
}

impl Default for CargoBundler {
    fn default() -> Self {
        Self::new()
    }
}

impl Bundler for CargoBundler {
    fn bundle(&self, spec: &PackageSpec) -> Result<(), BuildError> {
        let tool = self.cargo.to_string_lossy().into_owned();
        let mut cmd = Command::new(&self.cargo);
        cmd.args(["build", "--release", "--bin", BIN_NAME, "--target-dir"])
            .arg(&spec.build_dir)
            .current_dir(&spec.root);
        info!(command = ?cmd, "running build");

        let output = cmd.output().map_err(|source| BuildError::Launch {
            tool: tool.clone(),
            source,
        })?;
        if !output.status.success() {
            return Err(BuildError::ToolFailed {
                tool,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let built = spec
            .build_dir
            .join("release")
            .join(format!("{}{}", BIN_NAME, EXE_SUFFIX));
        if !built.exists() {
            return Err(BuildError::MissingArtifact(built));
        }
        fs::create_dir_all(&spec.dist_dir)?;
        fs::copy(&built, spec.exe_path())?;
        Ok(())
    }
}

/// Removes the build and dist directories. Returns what was deleted.
pub fn clean(spec: &PackageSpec) -> Vec<PathBuf> {
    let mut removed = Vec::new();
    for path in [&spec.build_dir, &spec.dist_dir] {
        if !path.exists() {
            continue;
        }
        let outcome = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        match outcome {
            Ok(()) => {
                info!(path = %path.display(), "deleted");
                removed.push(path.clone());
            }
            Err(e) => warn!(path = %path.display(), error = %e, "failed to delete"),
        }
    }
    removed
}

/// Runs the whole packaging flow and returns the executable path.
pub fn package<B: Bundler>(spec: &PackageSpec, bundler: &B) -> Result<PathBuf, BuildError> {
    if !spec.icon.exists() {
        return Err(BuildError::MissingIcon(spec.icon.clone()));
    }

    clean(spec);

    match build(spec, bundler) {
        Ok(path) => Ok(path),
        Err(e) => {
            warn!(error = %e, "build failed, cleaning up");
            clean(spec);
            Err(e)
        }
    }
}

fn build<B: Bundler>(spec: &PackageSpec, bundler: &B) -> Result<PathBuf, BuildError> {
    bundler.bundle(spec)?;

    let exe = spec.exe_path();
    if !exe.exists() {
        return Err(BuildError::MissingArtifact(exe));
    }

    let assets = spec.dist_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets)?;
    if let Some(name) = spec.icon.file_name() {
        fs::copy(&spec.icon, assets.join(name))?;
    }

    if let Some(resources) = &spec.resources {
        let name = resources
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(RESOURCE_DIR));
        copy_dir(resources, &spec.dist_dir.join(name))?;
    }

    let config = spec.root.join(CONFIG_FILENAME);
    if config.is_file() {
        fs::copy(&config, spec.dist_dir.join(CONFIG_FILENAME))?;
    }

    Ok(exe)
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}
