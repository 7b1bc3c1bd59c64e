//! # Module Core
//!
//! Modules, their dependency graph, and the targets and schemes generated
//! from them. Everything here is a pure transformation over in-memory values.
//!
//! - [`name`] - module identity and derived artifact names
//! - [`dependency`] - declared and resolved dependency edges
//! - [`config`] - module configuration and product kinds
//! - [`graph`] - validation and transitive resolution
//! - [`target`] / [`scheme`] - synthesis per module
//! - [`project`] - whole-project assembly

pub mod config;
pub mod context;
pub mod dependency;
pub mod graph;
pub mod name;
pub mod project;
pub mod scheme;
pub mod target;
pub mod values;

pub use config::{Module, ModuleConfig, Product, TestConfig};
pub use context::{ContextError, ProjectContext};
pub use dependency::{Dependency, TargetDependency};
pub use graph::{ModuleGraph, ModuleGraphError};
pub use name::ModuleName;
pub use project::{Project, ProjectExtras};
pub use scheme::{Scheme, synthesize_schemes};
pub use target::{SynthesisError, Target, synthesize_targets};
