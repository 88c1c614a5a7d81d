use std::{collections::HashMap, fmt::Display, path::Path};

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::model::ParseError;

#[derive(Clone, Hash, Deserialize, Serialize, Debug, PartialEq, Eq, Ord, PartialOrd)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(s: String) -> Self {
        PackageName(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        PackageName(s)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        PackageName(s.to_string())
    }
}

/// Dependency manifest loaded into memory: every package maps to the packages
/// it directly depends on, in the order they were declared.
///
/// Packages keep their manifest declaration order, which makes the resolved
/// install order deterministic for a given manifest. A dependency is allowed
/// to name a package without an entry of its own; whether that is an error is
/// decided at resolution time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    packages: Vec<(PackageName, Vec<PackageName>)>,
    index: HashMap<PackageName, usize>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a package with its direct dependencies. Re-declaring a package
    /// replaces its dependency list, like inserting twice into a map.
    pub fn insert(&mut self, package: PackageName, dependencies: Vec<PackageName>) {
        match self.index.get(&package) {
            Some(&position) => self.packages[position].1 = dependencies,
            None => {
                self.index.insert(package.clone(), self.packages.len());
                self.packages.push((package, dependencies));
            }
        }
    }

    pub fn contains(&self, package: &PackageName) -> bool {
        self.index.contains_key(package)
    }

    /// Direct dependencies of `package`, or `None` if the manifest has no
    /// entry for it.
    pub fn dependencies(&self, package: &PackageName) -> Option<&[PackageName]> {
        self.index
            .get(package)
            .map(|&position| self.packages[position].1.as_slice())
    }

    /// All packages in manifest declaration order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.packages.iter().map(|(package, _)| package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn from_file(path: &Path) -> Result<DependencyGraph, ParseError> {
        debug!(
            "Attempting to read dependency manifest from {}",
            path.display()
        );
        let graph = Self::parse_file(path);
        if let Err(err) = &graph {
            error!(
                "Could not build a valid dependency graph from manifest {} due to err {err}",
                path.display()
            )
        }
        graph
    }

    fn parse_file(path: &Path) -> Result<DependencyGraph, ParseError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => DependencyGraph::from_json_str(&std::fs::read_to_string(path)?),
            Some("toml") => DependencyGraph::from_toml_str(&std::fs::read_to_string(path)?),
            _ => Err(ParseError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            )),
        }
    }

    /// Parses a JSON manifest: an object mapping each package name to the
    /// array of package names it depends on.
    pub fn from_json_str(data: &str) -> Result<DependencyGraph, ParseError> {
        let entries = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(data)?;

        let mut graph = DependencyGraph::new();
        for (package, dependencies) in entries {
            let dependencies = serde_json::from_value::<Vec<PackageName>>(dependencies)?;
            graph.insert(PackageName::new(package), dependencies);
        }
        Ok(graph)
    }

    /// Parses a TOML manifest: a top level table mapping each package name to
    /// the array of package names it depends on.
    pub fn from_toml_str(data: &str) -> Result<DependencyGraph, ParseError> {
        let entries = toml::from_str::<toml::Table>(data)?;

        let mut graph = DependencyGraph::new();
        for (package, dependencies) in entries {
            let dependencies = dependencies.try_into::<Vec<PackageName>>()?;
            graph.insert(PackageName::new(package), dependencies);
        }
        Ok(graph)
    }
}

impl FromIterator<(PackageName, Vec<PackageName>)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (PackageName, Vec<PackageName>)>>(iter: I) -> Self {
        let mut graph = DependencyGraph::new();
        for (package, dependencies) in iter {
            graph.insert(package, dependencies);
        }
        graph
    }
}
