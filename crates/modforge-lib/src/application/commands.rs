//! Command execution handlers
//!
//! Every handler takes a [`Session`] so it can be driven by the live
//! binary or by the mocks in tests.

use crate::application::session::{CommandSession, Session};
use crate::application::{AppConfig, Commands};
use crate::manifest::{Manifest, ManifestFormat, ProjectPlan};
use crate::module::{
    ModuleGraphError, ModuleName, Scheme, Target, synthesize_schemes, synthesize_targets,
};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Execute a CLI command against the live filesystem and terminal
pub fn execute_command(config: AppConfig, command: Option<Commands>) -> Result<()> {
    let session = CommandSession::new(config);

    let Some(command) = command else {
        session
            .display()
            .document("modforge - module-based project generator\nRun 'modforge --help' for usage information\n")?;
        return Ok(());
    };

    execute_command_with_session(command, &session)
}

pub fn execute_command_with_session(command: Commands, session: &dyn Session) -> Result<()> {
    debug!(?command, "Executing command");
    match command {
        Commands::Generate { output } => handle_generate(session, output.as_deref()),
        Commands::Check { output } => handle_check(session, &output),
        Commands::Resolve { module } => handle_resolve(session, &module),
        Commands::Describe { module } => handle_describe(session, &module),
        Commands::Validate => handle_validate(session),
        Commands::Version => handle_version(session),
    }
}

/// Read, parse and validate the configured manifest
fn load_plan(session: &dyn Session) -> Result<ProjectPlan> {
    let path = session.config().manifest_path();
    let format = ManifestFormat::from_path(&path)?;
    let content = session
        .filesystem()
        .read_to_string(&path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;

    let plan = Manifest::parse(&content, format, &path)?.into_plan()?;
    debug!(manifest = %path.display(), modules = plan.graph.len(), "Loaded manifest");
    Ok(plan)
}

fn render_project(plan: &ProjectPlan) -> Result<String> {
    let project = plan
        .assemble()
        .with_context(|| format!("Failed to assemble project '{}'", plan.name))?;
    project
        .to_json()
        .context("Failed to serialize project descriptor")
}

fn handle_generate(session: &dyn Session, output: Option<&Path>) -> Result<()> {
    let plan = load_plan(session)?;
    let json = render_project(&plan)?;

    match output {
        Some(output) => {
            let path = session.config().resolve_path(output);
            session.filesystem().write_file(&path, &json)?;
            info!(path = %path.display(), "Wrote project descriptor");
            session
                .display()
                .success(&format!("Generated {} ({} modules)", path.display(), plan.graph.len()));
            Ok(())
        }
        None => session.display().document(&json),
    }
}

fn handle_check(session: &dyn Session, output: &Path) -> Result<()> {
    let path: PathBuf = session.config().resolve_path(output);
    if !session.filesystem().exists(&path) {
        bail!(
            "{} does not exist; run `modforge generate -o {}`",
            path.display(),
            output.display()
        );
    }

    let plan = load_plan(session)?;
    let fresh = render_project(&plan)?;
    let existing = session.filesystem().read_to_string(&path)?;

    if existing != fresh {
        bail!(
            "{} is out of date; run `modforge generate -o {}`",
            path.display(),
            output.display()
        );
    }

    session
        .display()
        .success(&format!("{} is up to date", path.display()));
    Ok(())
}

fn handle_resolve(session: &dyn Session, module: &str) -> Result<()> {
    let plan = load_plan(session)?;
    let edges = plan.graph.resolve(&ModuleName::new(module))?;

    let listing: String = edges.iter().map(|edge| format!("{edge}\n")).collect();
    session.display().document(&listing)
}

/// Per-module synthesis result printed by `describe`
#[derive(Debug, Serialize)]
struct ModuleDescription<'a> {
    module: &'a str,
    dependents: Vec<&'a str>,
    targets: Vec<Target>,
    schemes: Vec<Scheme>,
}

fn handle_describe(session: &dyn Session, module: &str) -> Result<()> {
    let plan = load_plan(session)?;
    let name = ModuleName::new(module);
    let declared = plan
        .graph
        .get(&name)
        .ok_or_else(|| ModuleGraphError::ModuleNotFound { name: name.clone() })?;

    let description = ModuleDescription {
        module,
        dependents: plan
            .graph
            .dependents(&name)
            .into_iter()
            .map(ModuleName::as_str)
            .collect(),
        targets: synthesize_targets(&plan.graph, declared, &plan.context)?,
        schemes: synthesize_schemes(declared),
    };

    let mut json = serde_json::to_string_pretty(&description)?;
    json.push('\n');
    session.display().document(&json)
}

fn handle_validate(session: &dyn Session) -> Result<()> {
    let plan = load_plan(session)?;
    session.display().success(&format!(
        "{} is valid: project '{}', {} modules",
        session.config().manifest_path().display(),
        plan.name,
        plan.graph.len()
    ));
    Ok(())
}

fn handle_version(session: &dyn Session) -> Result<()> {
    session
        .display()
        .document(&format!("modforge {}\n", env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
