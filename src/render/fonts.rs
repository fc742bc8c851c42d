//! Font family lookup for the PDF document.
//!
//! genpdf needs a TrueType family on disk (`<Family>-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf`,
//! `-BoldItalic.ttf`). The configured directory is tried first, then `VENDOR_DETAIL_FONTS_DIR`,
//! then `assets/fonts` next to the executable and the crate manifest, and finally the Liberation
//! Sans family shipped by most Linux distributions.

use std::env;
use std::path::{Path, PathBuf};

use genpdf::fonts::{self, FontData, FontFamily};
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::error::{Error, Result};

pub const FONTS_DIR_ENV: &str = "VENDOR_DETAIL_FONTS_DIR";

const STYLE_SUFFIXES: &[&str] = &["Regular", "Bold", "Italic", "BoldItalic"];

const SYSTEM_FALLBACKS: &[(&str, &str)] = &[
    ("/usr/share/fonts/truetype/liberation", "LiberationSans"),
    ("/usr/share/fonts/liberation-sans", "LiberationSans"),
    ("/usr/share/fonts/TTF", "LiberationSans"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct FontCandidate {
    directory: PathBuf,
    family: String,
}

fn candidates(config: &RenderConfig) -> Vec<FontCandidate> {
    let mut directories = Vec::new();

    if let Some(dir) = &config.fonts_dir {
        directories.push(dir.clone());
    }

    if let Some(dir) = env::var_os(FONTS_DIR_ENV).filter(|value| !value.is_empty()) {
        directories.push(PathBuf::from(dir));
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            directories.push(bin_dir.join("assets/fonts"));
        }
    }

    directories.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));

    let mut candidates: Vec<FontCandidate> = Vec::new();
    for directory in directories {
        let candidate = FontCandidate {
            directory,
            family: config.font_family.clone(),
        };
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    candidates.extend(SYSTEM_FALLBACKS.iter().map(|(dir, family)| FontCandidate {
        directory: PathBuf::from(dir),
        family: family.to_string(),
    }));

    candidates
}

fn missing_files(directory: &Path, family: &str) -> Vec<String> {
    STYLE_SUFFIXES
        .iter()
        .map(|suffix| format!("{}-{}.ttf", family, suffix))
        .filter(|name| !directory.join(name).is_file())
        .collect()
}

fn resolve(config: &RenderConfig) -> Result<FontCandidate> {
    let mut attempts = Vec::new();

    for candidate in candidates(config) {
        if !candidate.directory.is_dir() {
            attempts.push(format!("{} (directory missing)", candidate.directory.display()));
            continue;
        }

        let missing = missing_files(&candidate.directory, &candidate.family);
        if missing.is_empty() {
            return Ok(candidate);
        }
        attempts.push(format!(
            "{} (missing [{}])",
            candidate.directory.display(),
            missing.join(", ")
        ));
    }

    Err(Error::Font(format!(
        "no usable font family found; checked {}. Set render.fonts_dir or {}",
        attempts.join(", "),
        FONTS_DIR_ENV
    )))
}

/// Loads the first complete font family among the search candidates.
pub fn load_font_family(config: &RenderConfig) -> Result<FontFamily<FontData>> {
    let candidate = resolve(config)?;

    if candidate.family != config.font_family {
        warn!(
            requested = %config.font_family,
            fallback = %candidate.family,
            "Requested font family unavailable, using fallback"
        );
    }
    debug!(
        directory = %candidate.directory.display(),
        family = %candidate.family,
        "Loading font family"
    );

    fonts::from_files(&candidate.directory, &candidate.family, None).map_err(|err| {
        Error::Font(format!(
            "failed to load font family '{}' from {}: {}",
            candidate.family,
            candidate.directory.display(),
            err
        ))
    })
}

/// Whether [`load_font_family`] would find a complete family on disk.
pub fn fonts_available(config: &RenderConfig) -> bool {
    resolve(config).is_ok()
}
