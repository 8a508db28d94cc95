//! Depth-first dependency resolution with cycle detection.
//!
//! The traversal keeps two sets of component names: `resolved` holds
//! finalized names in insertion order, `visiting` holds the current DFS
//! path. A name encountered while already on the path is a cycle and
//! fails the whole resolution; partial results are discarded.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use sprig_core::error::SprigError;

use crate::ResolverResult;

/// Map from component name to its declared dependency names
pub type DependencyLookup = IndexMap<String, Vec<String>>;

/// Expand `requested` into a flattened, de-duplicated install order.
///
/// Dependencies always precede their dependents in the output, and the
/// output is deterministic for a given request order. Names without an
/// entry in `lookup` are omitted rather than erroring: installation is
/// best-effort over the components the registry actually has.
pub fn resolve_install_order(
    requested: &[String],
    lookup: &DependencyLookup,
) -> ResolverResult<Vec<String>> {
    let mut resolved: IndexSet<String> = IndexSet::new();
    let mut visiting: IndexSet<String> = IndexSet::new();

    for name in requested {
        visit(name, lookup, &mut resolved, &mut visiting)?;
    }

    Ok(resolved.into_iter().collect())
}

fn visit(
    name: &str,
    lookup: &DependencyLookup,
    resolved: &mut IndexSet<String>,
    visiting: &mut IndexSet<String>,
) -> ResolverResult<()> {
    if resolved.contains(name) {
        return Ok(());
    }

    if visiting.contains(name) {
        return Err(SprigError::CircularDependency {
            component: name.to_string(),
        });
    }

    let Some(dependencies) = lookup.get(name) else {
        warn!(component = name, "unknown component omitted from resolution");
        return Ok(());
    };

    visiting.insert(name.to_string());
    for dependency in dependencies {
        visit(dependency, lookup, resolved, visiting)?;
    }
    visiting.shift_remove(name);

    // Post-order: a name is finalized only after all its dependencies
    resolved.insert(name.to_string());
    Ok(())
}
