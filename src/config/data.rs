//! Loading the catalog, program, and equivalency files.
//!
//! Everything the engine reads is gathered once into an immutable
//! [`DataSet`] and borrowed from there.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::catalog::{Catalog, Course, Equivalency, EquivalencyMap};
use crate::config::schema::DegreeGapConfig;
use crate::error::{DegreeGapError, Result};
use crate::prereq::{HierarchyConfig, SatisfactionChecker};
use crate::program::Program;

/// Everything the engine evaluates against.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub catalog: Catalog,
    pub programs: Vec<Program>,
    pub equivalencies: EquivalencyMap,
    pub hierarchy: HierarchyConfig,
}

impl DataSet {
    /// Assemble a data set from already-loaded parts.
    pub fn new(
        catalog: Catalog,
        programs: Vec<Program>,
        equivalencies: EquivalencyMap,
        hierarchy: HierarchyConfig,
    ) -> Self {
        Self {
            catalog,
            programs,
            equivalencies,
            hierarchy,
        }
    }

    /// Load every file named by `config`, resolving relative paths
    /// against `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `DataNotFound` when a catalog or the programs file is
    /// missing, and `DataParseError` when a file is not valid JSON of the
    /// expected shape. A missing equivalency file is only a warning.
    pub fn load(config: &DegreeGapConfig, project_root: &Path) -> Result<Self> {
        let catalog_paths: Vec<PathBuf> = config
            .data
            .catalogs
            .iter()
            .map(|p| resolve_path(project_root, p))
            .collect();
        let catalog = load_catalog(&catalog_paths)?;
        let programs = load_programs(&resolve_path(project_root, &config.data.programs))?;
        let equivalencies = match &config.data.equivalencies {
            Some(path) => load_equivalencies(&resolve_path(project_root, path))?,
            None => EquivalencyMap::new(),
        };

        tracing::debug!(
            "Loaded {} courses, {} programs, {} equivalencies",
            catalog.len(),
            programs.len(),
            equivalencies.len()
        );

        Ok(Self::new(
            catalog,
            programs,
            equivalencies,
            config.hierarchy_rules.clone(),
        ))
    }

    /// Satisfaction rules built from this data set's equivalencies and
    /// hierarchy settings.
    pub fn checker(&self) -> SatisfactionChecker<'_> {
        SatisfactionChecker::new(Some(&self.equivalencies), Some(&self.hierarchy))
    }

    /// Find a program by id, ignoring case.
    pub fn program(&self, id: &str) -> Option<&Program> {
        let id = id.trim();
        self.programs
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.programs.iter().find(|p| p.id.eq_ignore_ascii_case(id)))
    }

    /// Find a program by id or fail with `UnknownProgram`.
    pub fn require_program(&self, id: &str) -> Result<&Program> {
        self.program(id).ok_or_else(|| DegreeGapError::UnknownProgram {
            id: id.trim().to_string(),
        })
    }

    /// Ids of every major, sorted.
    pub fn majors(&self) -> Vec<&str> {
        let mut majors: Vec<&str> = self
            .programs
            .iter()
            .filter(|p| p.is_major())
            .map(|p| p.id.as_str())
            .collect();
        majors.sort_unstable();
        majors.dedup();
        majors
    }
}

/// Resolve a configured path relative to the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// A catalog file is either keyed by course code or a plain list.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Keyed(BTreeMap<String, Course>),
    Listed(Vec<Course>),
}

/// Load catalog files in order; later files win per normalized code.
pub fn load_catalog(paths: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for path in paths {
        let layer = load_catalog_file(path)?;
        tracing::debug!("Catalog {}: {} courses", path.display(), layer.len());
        catalog.extend(layer);
    }
    Ok(catalog)
}

/// Load one catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let file: CatalogFile = read_json(path)?;
    let mut catalog = Catalog::new();
    let mut skipped = 0usize;

    match file {
        CatalogFile::Keyed(courses) => {
            for (code, course) in courses {
                if !catalog.insert(&code, course) {
                    skipped += 1;
                }
            }
        }
        CatalogFile::Listed(courses) => {
            for course in courses {
                if !catalog.insert_course(course) {
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "Skipped {} course records without a code in {}",
            skipped,
            path.display()
        );
    }
    Ok(catalog)
}

/// Load the program rules file.
pub fn load_programs(path: &Path) -> Result<Vec<Program>> {
    read_json(path)
}

/// Load the equivalency file; a missing file yields an empty map.
pub fn load_equivalencies(path: &Path) -> Result<EquivalencyMap> {
    if !path.exists() {
        tracing::warn!(
            "Equivalency file {} not found; prerequisites will match exactly",
            path.display()
        );
        return Ok(EquivalencyMap::new());
    }
    let raw: HashMap<String, Equivalency> = read_json(path)?;
    Ok(EquivalencyMap::from_entries(raw))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DegreeGapError::DataNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DegreeGapError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| DegreeGapError::DataParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
