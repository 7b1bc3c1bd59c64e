//! Module graph validation and transitive dependency resolution
//!
//! A [`ModuleGraph`] owns every module of a project keyed by name. Building
//! one validates the graph (unique names, known references, no cycles), after
//! which resolution is total: it always terminates and never fails for a
//! module that belongs to the graph.

use super::config::Module;
use super::dependency::{TargetDependency, dedup_preserving_order};
use super::name::ModuleName;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while building or querying a module graph
#[derive(Debug, Error)]
pub enum ModuleGraphError {
    #[error("Module names must not be empty")]
    EmptyModuleName,

    #[error("Duplicate module: {name}")]
    DuplicateModule { name: ModuleName },

    #[error("Name collision: '{name}' is generated by both {first} and {second}")]
    NameCollision {
        name: String,
        first: ModuleName,
        second: ModuleName,
    },

    #[error("Target '{name}' is declared explicitly but {owner}")]
    TargetCollision { name: String, owner: String },

    #[error("Missing module: {name} required by {required_by}")]
    MissingModule {
        name: ModuleName,
        required_by: ModuleName,
    },

    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    #[error("Module not found: {name}")]
    ModuleNotFound { name: ModuleName },
}

/// Validated set of modules
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    modules: BTreeMap<ModuleName, Module>,
}

impl ModuleGraph {
    /// Build and validate a graph.
    ///
    /// Fails on duplicate names, generated names claimed twice, references to
    /// undeclared modules and dependency cycles.
    pub fn new<I>(modules: I) -> Result<Self, ModuleGraphError>
    where
        I: IntoIterator<Item = Module>,
    {
        let mut map = BTreeMap::new();
        for module in modules {
            if module.name.as_str().trim().is_empty() {
                return Err(ModuleGraphError::EmptyModuleName);
            }
            if map.contains_key(&module.name) {
                return Err(ModuleGraphError::DuplicateModule { name: module.name });
            }
            map.insert(module.name.clone(), module);
        }

        let graph = Self { modules: map };
        graph.check_name_collisions()?;
        graph.check_references()?;
        graph.check_cycles()?;

        debug!(modules = graph.len(), "Module graph validated");
        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, name: &ModuleName) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Modules in name order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Modules declaring a direct dependency on `name`, in name order
    pub fn dependents(&self, name: &ModuleName) -> Vec<&ModuleName> {
        self.modules
            .values()
            .filter(|module| module.module_dependencies().any(|dep| dep == name))
            .map(|module| &module.name)
            .collect()
    }

    /// Full dependency edge list of a module's main target.
    ///
    /// Direct module edges come first (wrappers included), then the resolved
    /// edges of each non-wrapper dependency, then declared non-module
    /// dependencies, then the module's own resource bundle when it has one.
    /// Duplicates keep their first position. Wrappers resolve to nothing.
    pub fn resolve(&self, name: &ModuleName) -> Result<Vec<TargetDependency>, ModuleGraphError> {
        let module = self
            .get(name)
            .ok_or_else(|| ModuleGraphError::ModuleNotFound { name: name.clone() })?;

        let mut memo = HashMap::new();
        self.resolve_module(module, &mut memo)
    }

    fn resolve_module<'a>(
        &'a self,
        module: &'a Module,
        memo: &mut HashMap<&'a ModuleName, Vec<TargetDependency>>,
    ) -> Result<Vec<TargetDependency>, ModuleGraphError> {
        if let Some(resolved) = memo.get(&module.name) {
            return Ok(resolved.clone());
        }

        if module.is_wrapper() {
            return Ok(Vec::new());
        }

        let referenced = module
            .module_dependencies()
            .map(|dep| self.lookup(dep, &module.name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut edges: Vec<TargetDependency> = referenced
            .iter()
            .map(|dep| TargetDependency::module(&dep.name))
            .collect();

        for dep in referenced.iter().filter(|dep| !dep.is_wrapper()) {
            edges.extend(self.resolve_module(dep, memo)?);
        }

        edges.extend(module.target_dependencies().cloned());

        if module.has_resource_bundle() {
            edges.push(TargetDependency::resources_of(&module.name));
        }

        let resolved = dedup_preserving_order(edges);
        trace!(module = %module.name, edges = resolved.len(), "Resolved dependencies");

        memo.insert(&module.name, resolved.clone());
        Ok(resolved)
    }

    fn lookup(
        &self,
        name: &ModuleName,
        required_by: &ModuleName,
    ) -> Result<&Module, ModuleGraphError> {
        self.get(name).ok_or_else(|| ModuleGraphError::MissingModule {
            name: name.clone(),
            required_by: required_by.clone(),
        })
    }

    fn check_name_collisions(&self) -> Result<(), ModuleGraphError> {
        let mut claimed: HashMap<String, &ModuleName> = HashMap::new();

        for module in self.modules.values() {
            for name in generated_names(module) {
                if let Some(owner) = claimed.get(&name) {
                    return Err(ModuleGraphError::NameCollision {
                        name,
                        first: (*owner).clone(),
                        second: module.name.clone(),
                    });
                }
                claimed.insert(name, &module.name);
            }
        }

        Ok(())
    }

    /// Reject explicitly declared targets that reuse a generated name or
    /// each other's name
    pub fn check_extra_targets<'a, I>(&self, names: I) -> Result<(), ModuleGraphError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed: HashMap<String, String> = HashMap::new();
        for module in self.modules.values() {
            for name in generated_names(module) {
                claimed.insert(name, format!("is generated by module {}", module.name));
            }
        }

        for name in names {
            if let Some(owner) = claimed.get(name) {
                return Err(ModuleGraphError::TargetCollision {
                    name: name.to_string(),
                    owner: owner.clone(),
                });
            }
            claimed.insert(name.to_string(), "is declared twice".to_string());
        }

        Ok(())
    }

    fn check_references(&self) -> Result<(), ModuleGraphError> {
        for module in self.modules.values() {
            for dep in module.module_dependencies() {
                self.lookup(dep, &module.name)?;
            }
        }
        Ok(())
    }

    /// Wrappers are terminal, so their own declared module edges never
    /// take part in resolution and are left out of the cycle check.
    fn check_cycles(&self) -> Result<(), ModuleGraphError> {
        let mut graph: DiGraph<&ModuleName, ()> = DiGraph::new();
        let node_map: HashMap<&ModuleName, NodeIndex> = self
            .modules
            .keys()
            .map(|name| (name, graph.add_node(name)))
            .collect();

        for module in self.modules.values().filter(|m| !m.is_wrapper()) {
            let from = node_map[&module.name];
            for dep in module.module_dependencies() {
                graph.add_edge(from, node_map[dep], ());
            }
        }

        match toposort(&graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => {
                let start = cycle.node_id();
                let path = find_cycle(&graph, start);
                Err(ModuleGraphError::CircularDependency {
                    cycle: path
                        .iter()
                        .map(|idx| graph[*idx].as_str())
                        .collect::<Vec<_>>()
                        .join(" → "),
                })
            }
        }
    }
}

/// Target names a module will actually generate
fn generated_names(module: &Module) -> impl Iterator<Item = String> {
    let generated = [true, module.has_resource_bundle(), module.has_test_target()];
    module
        .name
        .derived_names()
        .into_iter()
        .zip(generated)
        .filter_map(|(name, generated)| generated.then_some(name))
}

/// Path `start → … → start`; `start` must lie on a cycle
fn find_cycle(graph: &DiGraph<&ModuleName, ()>, start: NodeIndex) -> Vec<NodeIndex> {
    fn walk(
        graph: &DiGraph<&ModuleName, ()>,
        node: NodeIndex,
        start: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        stack: &mut Vec<NodeIndex>,
    ) -> bool {
        stack.push(node);
        for next in graph.neighbors(node) {
            if next == start {
                stack.push(start);
                return true;
            }
            if visited.insert(next) && walk(graph, next, start, visited, stack) {
                return true;
            }
        }
        stack.pop();
        false
    }

    let mut visited = HashSet::from([start]);
    let mut stack = Vec::new();
    if walk(graph, start, start, &mut visited, &mut stack) {
        stack
    } else {
        vec![start]
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
