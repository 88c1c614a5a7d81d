use std::{collections::HashSet, fmt::Display};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::manifest::{DependencyGraph, PackageName};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error(
        "Cycle detected in dependency graph when trying to add `{package}`: {}",
        join_names(.path, " -> ")
    )]
    CycleDetected {
        package: PackageName,
        path: Vec<PackageName>,
    },
    #[error("Unknown dependency `{dependency}` required by `{required_by}`")]
    UnknownDependency {
        dependency: PackageName,
        required_by: PackageName,
    },
}

/// How to treat a dependency that has no entry of its own in the manifest.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum ResolveMode {
    /// Fail resolution with [`ResolveError::UnknownDependency`].
    #[default]
    #[serde(rename = "strict")]
    Strict,
    /// Consider the dependency already installed: it satisfies its dependents
    /// but is left out of the install order.
    #[serde(rename = "assume-installed")]
    AssumeInstalled,
}

impl Display for ResolveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveMode::Strict => f.write_str("strict"),
            ResolveMode::AssumeInstalled => f.write_str("assume-installed"),
        }
    }
}

/// Total order in which the packages of a manifest can be installed, every
/// package coming after all of its dependencies.
///
/// Displays space joined, which is the format the CLI prints to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOrder(Vec<PackageName>);

impl InstallOrder {
    pub fn packages(&self) -> &[PackageName] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for InstallOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_names(&self.0, " "))
    }
}

fn join_names(packages: &[PackageName], separator: &str) -> String {
    packages
        .iter()
        .map(PackageName::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Computes the order in which the packages of `graph` can be installed so
/// that every package is installed after all of its direct and transitive
/// dependencies.
///
/// Packages are finalized in depth-first post-order. Roots are explored in
/// manifest declaration order and each package's dependencies in their listed
/// order, so the result is deterministic for a given manifest. The order
/// contains exactly the packages declared in the manifest; a dependency
/// without an entry of its own is handled according to `resolve_mode`.
///
/// A cyclic dependency chain makes an install order impossible and fails with
/// [`ResolveError::CycleDetected`], reporting the revisited package and the
/// traversal path that reached it. No partial order is produced.
pub fn install_order(
    graph: &DependencyGraph,
    resolve_mode: ResolveMode,
) -> Result<InstallOrder, ResolveError> {
    let mut traversal = Traversal::new(graph, resolve_mode);
    for package in graph.packages() {
        traversal.explore(package)?;
    }
    Ok(InstallOrder(traversal.order))
}

/// State shared between the per-root explorations of one resolution call:
/// the packages already finalized and the install order built so far.
struct Traversal<'a> {
    graph: &'a DependencyGraph,
    resolve_mode: ResolveMode,
    visited: HashSet<&'a PackageName>,
    order: Vec<PackageName>,
}

/// One entry of the exploration stack: a package and the position of the next
/// dependency to descend into. The stack as a whole is the active traversal
/// path, innermost package last.
struct Frame<'a> {
    package: &'a PackageName,
    next_dependency: usize,
}

impl<'a> Traversal<'a> {
    fn new(graph: &'a DependencyGraph, resolve_mode: ResolveMode) -> Self {
        Self {
            graph,
            resolve_mode,
            visited: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Depth-first exploration from `root`, finalizing packages in
    /// post-order: a package joins the install order only once every one of
    /// its dependencies has. Iterative with an explicit frame stack so that
    /// long dependency chains cannot overflow the call stack.
    fn explore(&mut self, root: &'a PackageName) -> Result<(), ResolveError> {
        if self.visited.contains(root) {
            return Ok(());
        }

        let mut stack = vec![Frame {
            package: root,
            next_dependency: 0,
        }];

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let package = stack[top].package;
            let dependencies = self.graph.dependencies(package).unwrap_or_default();

            let Some(dependency) = dependencies.get(stack[top].next_dependency) else {
                // all dependencies finalized, the package itself is next
                self.order.push(package.clone());
                self.visited.insert(package);
                stack.pop();
                continue;
            };
            stack[top].next_dependency += 1;

            if self.visited.contains(dependency) {
                continue;
            }
            if stack.iter().any(|frame| frame.package == dependency) {
                return Err(ResolveError::CycleDetected {
                    package: dependency.clone(),
                    path: stack.iter().map(|frame| frame.package.clone()).collect(),
                });
            }
            if !self.graph.contains(dependency) {
                match self.resolve_mode {
                    ResolveMode::Strict => {
                        return Err(ResolveError::UnknownDependency {
                            dependency: dependency.clone(),
                            required_by: package.clone(),
                        });
                    }
                    ResolveMode::AssumeInstalled => {
                        debug!("Assuming dependency {dependency} of {package} is already installed");
                        self.visited.insert(dependency);
                        continue;
                    }
                }
            }

            stack.push(Frame {
                package: dependency,
                next_dependency: 0,
            });
        }

        Ok(())
    }
}
