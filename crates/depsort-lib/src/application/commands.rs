//! Command execution handlers
//!
//! `execute_command` wires the resolved configuration to a resolver loaded
//! from the manifest. `execute_command_with_resolver` runs a single command
//! against any resolver and writer, which is what the tests drive.

use crate::application::{AppConfig, CliConfig, Commands};
use crate::display::Display;
use crate::logger::Logger;
use crate::manifest::Manifest;
use crate::primitives::LogContext;
use crate::resolver::DependencyResolver;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;

const BINARY_NAME: &str = "depsort";

/// Execute the CLI command described by `config`, writing results to stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let display = Display::from_config(&config.app_config);
    let mut stdout = io::stdout().lock();

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            writeln!(stdout, "{}", display.usage_hint())?;
            return Ok(());
        }
    };

    let resolver = if command.requires_manifest() {
        load_resolver(&config.app_config)?
    } else {
        DependencyResolver::default()
    };

    execute_command_with_resolver(command, &resolver, &display, &mut stdout)
}

/// Load the configured manifest and build a resolver from it
pub fn load_resolver(config: &AppConfig) -> Result<DependencyResolver> {
    let path = config.ensure_manifest()?;
    let manifest = Manifest::load(path)
        .with_context(|| format!("Failed to load manifest {}", path.display()))?;

    if let Some(logger) = Logger::global() {
        logger.info(
            &format!("Loaded manifest {}", path.display()),
            Some(LogContext::with_items(
                "load_manifest",
                manifest.packages.len() as u64,
            )),
        );
    }

    Ok(DependencyResolver::from_manifest(&manifest))
}

/// Execute a specific command against a provided resolver (for testing)
pub fn execute_command_with_resolver(
    command: Commands,
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
) -> Result<()> {
    debug!(?command, "Executing command");

    match command {
        Commands::Version => handle_version(display, out),
        Commands::Packages => handle_packages(resolver, display, out),
        Commands::Order { package } => handle_order(resolver, display, out, &package),
        Commands::OrderAll => handle_order_all(resolver, display, out),
        Commands::ToInstall { new, installed } => {
            handle_to_install(resolver, display, out, &new, &installed)
        }
        Commands::MaxDeps => handle_max_deps(resolver, display, out),
        Commands::Deps {
            package,
            transitive,
        } => handle_deps(resolver, display, out, &package, transitive),
    }
}

fn write_rendered(out: &mut dyn Write, rendered: &str) -> Result<()> {
    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

fn handle_version(display: &Display, out: &mut dyn Write) -> Result<()> {
    let rendered = display.version(BINARY_NAME, env!("CARGO_PKG_VERSION"))?;
    write_rendered(out, &rendered)
}

fn handle_packages(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
) -> Result<()> {
    let packages = resolver.all_packages();
    write_rendered(out, &display.package_list("packages", None, &packages)?)
}

fn handle_order(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
    package: &str,
) -> Result<()> {
    let order = resolver
        .installation_order(package)
        .with_context(|| format!("Cannot compute installation order for {}", package))?;
    write_rendered(out, &display.package_list("order", Some(package), &order)?)
}

fn handle_order_all(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
) -> Result<()> {
    let order = resolver
        .installation_order_for_all_packages()
        .context("Cannot compute installation order for all packages")?;
    write_rendered(out, &display.package_list("order-all", None, &order)?)
}

fn handle_to_install(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
    new: &str,
    installed: &str,
) -> Result<()> {
    let missing = resolver.to_install(new, installed).with_context(|| {
        format!(
            "Cannot compute packages to install for {} with {} installed",
            new, installed
        )
    })?;
    write_rendered(out, &display.package_list("to-install", Some(new), &missing)?)
}

fn handle_max_deps(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
) -> Result<()> {
    let best = resolver
        .package_with_max_dependencies()
        .context("Cannot find the package with the most dependencies")?;

    let result = match &best {
        Some(name) => Some((name.as_str(), resolver.transitive_dependencies(name)?.len())),
        None => None,
    };
    write_rendered(out, &display.max_dependencies(result)?)
}

fn handle_deps(
    resolver: &DependencyResolver,
    display: &Display,
    out: &mut dyn Write,
    package: &str,
    transitive: bool,
) -> Result<()> {
    let (query, deps) = if transitive {
        ("deps-transitive", resolver.transitive_dependencies(package))
    } else {
        ("deps", resolver.direct_dependencies(package))
    };
    let deps = deps.with_context(|| format!("Cannot list dependencies of {}", package))?;
    write_rendered(out, &display.package_list(query, Some(package), &deps)?)
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
