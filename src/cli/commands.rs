//! Command dispatch over the sample catalog

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{sample, Catalog, NodeId, TreeDisplay};

/// Execute a parsed CLI command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = &cli.command;
    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => cmd_config(cli, command),
        _ => {
            let settings = Settings::load(cli.config.as_deref())?;
            if !settings.color {
                colored::control::set_override(false);
            }
            let (catalog, root) = sample::beatles()?;
            info!(nodes = catalog.len(), "sample catalog loaded");
            dispatch(command, &settings, &catalog, root)
        }
    }
}

fn dispatch(
    command: &Commands,
    settings: &Settings,
    catalog: &Catalog,
    root: NodeId,
) -> CliResult<()> {
    match command {
        Commands::Tree => cmd_tree(settings, catalog, root),
        Commands::Albums => cmd_albums(catalog, root),
        Commands::Songs { album } => cmd_songs(catalog, root, *album),
        Commands::Lineage { album, song } => cmd_lineage(settings, catalog, root, *album, *song),
        Commands::Stats => cmd_stats(catalog, root),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(level = "debug", skip(catalog))]
fn cmd_tree(settings: &Settings, catalog: &Catalog, root: NodeId) -> CliResult<()> {
    output::info(&catalog.to_tree(root, settings.show_kind));
    Ok(())
}

#[instrument(level = "debug", skip(catalog))]
fn cmd_albums(catalog: &Catalog, root: NodeId) -> CliResult<()> {
    let disco = catalog.view(root)?;
    output::header(disco.name());
    for (position, title) in child_names(catalog, root)?.iter().enumerate() {
        output::item(position, title);
    }
    Ok(())
}

#[instrument(level = "debug", skip(catalog))]
fn cmd_songs(catalog: &Catalog, root: NodeId, album: usize) -> CliResult<()> {
    let album = catalog.get_child(root, album)?;
    output::header(catalog.view(album)?.name());
    for (position, title) in child_names(catalog, album)?.iter().enumerate() {
        output::item(position, title);
    }
    Ok(())
}

#[instrument(level = "debug", skip(catalog))]
fn cmd_lineage(
    settings: &Settings,
    catalog: &Catalog,
    root: NodeId,
    album: usize,
    song: usize,
) -> CliResult<()> {
    output::info(&lineage_line(catalog, root, album, song, &settings.separator)?);
    Ok(())
}

#[instrument(level = "debug", skip(catalog))]
fn cmd_stats(catalog: &Catalog, root: NodeId) -> CliResult<()> {
    let stats = CatalogStats::collect(catalog, root)?;
    output::action("nodes", &stats.nodes);
    output::action("albums", &stats.albums);
    output::action("leaves", &stats.leaves);
    output::action("depth", &stats.depth);
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config unavailable"),
        },
    }
    Ok(())
}

/// Names of the direct children of `parent`, in insertion order.
pub fn child_names(catalog: &Catalog, parent: NodeId) -> CliResult<Vec<String>> {
    let view = catalog.view(parent)?;
    Ok(view.children().map(|child| child.name().to_string()).collect())
}

/// Song name followed by its ancestors, joined with `separator`.
pub fn lineage_line(
    catalog: &Catalog,
    root: NodeId,
    album: usize,
    song: usize,
    separator: &str,
) -> CliResult<String> {
    let song = catalog.view(root)?.child(album)?.child(song)?;
    debug!(song = %song.id(), "resolved song");
    Ok(catalog.lineage(song.id())?.iter().join(separator))
}

/// Summary numbers printed by `stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub nodes: usize,
    pub albums: usize,
    pub leaves: usize,
    pub depth: usize,
}

impl CatalogStats {
    pub fn collect(catalog: &Catalog, root: NodeId) -> CliResult<Self> {
        Ok(Self {
            nodes: catalog.count(root),
            albums: catalog.get_children(root)?.len(),
            leaves: catalog.leaves(root).len(),
            depth: catalog.depth(root),
        })
    }
}
