use log::debug;

use crate::{
    model::manifest::DependencyGraph,
    resolver::{self, InstallOrder, ResolveMode},
};
use std::{error::Error, path::Path};

/// Handler to the order command
/// Loads the dependency graph from the manifest and resolves the order in
/// which its packages can be installed.
pub fn do_order(
    manifest_path: &Path,
    resolve_mode: ResolveMode,
) -> Result<InstallOrder, Box<dyn Error>> {
    let graph = load_dependency_graph(manifest_path)?;

    debug!("Resolving install order in {} mode...", resolve_mode);
    let order = resolver::install_order(&graph, resolve_mode)?;
    debug!("Resolved install order: {:?}", order);

    Ok(order)
}

fn load_dependency_graph(manifest_path: &Path) -> Result<DependencyGraph, Box<dyn Error>> {
    let graph = DependencyGraph::from_file(manifest_path)?;
    debug!(
        "Loaded {} packages from manifest {}",
        graph.len(),
        manifest_path.display()
    );
    Ok(graph)
}
