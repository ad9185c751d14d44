//! OSGi bundle manifest reading.
//!
//! A bundle carries its identity in `META-INF/MANIFEST.MF`, either directly
//! on disk (directory-form bundle) or as an entry inside the jar archive.
//! Only the main attribute section is parsed: `Name: value` header lines,
//! where a line starting with a single space continues the previous value
//! (the format wraps long values at 72 bytes). Parsing stops at the first
//! blank line; per-entry sections are irrelevant to launch metadata.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::errors::ManifestError;

/// Manifest entry path inside a jar, and its on-disk location in a
/// directory-form bundle.
const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

const SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
const VERSION: &str = "Bundle-Version";

/// The parsed main section of a bundle manifest.
#[derive(Debug, Clone)]
pub struct BundleManifest {
    /// Header values, keyed by lowercased header name (lookups are
    /// case-insensitive, matching the manifest format).
    headers: HashMap<String, String>,

    /// The artifact the manifest was read from.
    path: PathBuf,
}

impl BundleManifest {
    /// Read the manifest out of a bundle artifact.
    ///
    /// A directory is read as a directory-form bundle
    /// (`<path>/META-INF/MANIFEST.MF`); anything else is opened as a jar
    /// archive and the embedded manifest entry is read.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = if path.is_dir() {
            let manifest_path = path.join(MANIFEST_ENTRY);
            if !manifest_path.is_file() {
                return Err(ManifestError::MissingEntry {
                    path: path.to_path_buf(),
                });
            }
            fs::read_to_string(&manifest_path).map_err(|source| ManifestError::Read {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            read_archive_manifest(path)?
        };

        Ok(BundleManifest {
            headers: parse_headers(&text),
            path: path.to_path_buf(),
        })
    }

    /// Parse a manifest from its raw text, recording the artifact it
    /// belongs to for diagnostics.
    pub fn parse(text: &str, path: &Path) -> Self {
        BundleManifest {
            headers: parse_headers(text),
            path: path.to_path_buf(),
        }
    }

    /// Look up a main-section header value. Header names are
    /// case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// The bundle's symbolic name: the `Bundle-SymbolicName` value up to the
    /// first `;`. Directives such as `singleton:=true` are discarded.
    pub fn symbolic_name(&self) -> Result<String, ManifestError> {
        let raw = self
            .header(SYMBOLIC_NAME)
            .ok_or_else(|| ManifestError::MissingHeader {
                path: self.path.clone(),
                header: SYMBOLIC_NAME,
            })?;

        let name = raw.split(';').next().unwrap_or(raw).trim();
        Ok(name.to_string())
    }

    /// The raw `Bundle-Version` value. Not parsed or validated.
    pub fn version(&self) -> Result<String, ManifestError> {
        self.header(VERSION)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| ManifestError::MissingHeader {
                path: self.path.clone(),
                header: VERSION,
            })
    }

    /// The artifact this manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read `META-INF/MANIFEST.MF` out of a jar archive.
fn read_archive_manifest(path: &Path) -> Result<String, ManifestError> {
    let file = fs::File::open(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|source| ManifestError::Archive {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entry = match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(ManifestError::MissingEntry {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(ManifestError::Archive {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}

/// Parse the main attribute section into a header map.
fn parse_headers(text: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        // Blank line terminates the main section.
        if line.is_empty() {
            break;
        }

        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some((_, value)) = current.as_mut() {
                value.push_str(continuation);
            }
            continue;
        }

        if let Some((key, value)) = current.take() {
            headers.insert(key, value);
        }

        // Lines without a separator are malformed; skip them.
        if let Some((name, value)) = line.split_once(':') {
            current = Some((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }

    if let Some((key, value)) = current {
        headers.insert(key, value);
    }

    headers
}
