//! # CLI Layer
//!
//! This module is **one possible UI client** for agrocat. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` with the API and the color choice
//! 3. **API Dispatch**: Call the matching `CatalogApi` method
//! 4. **Output Formatting**: Render `CmdResult` through templates, or as JSON with `--json`
//!
//! Errors are returned to `main.rs`, which prints them and exits with status 1.
//!
//! With `--json`, stdout carries only the JSON document; messages go to stderr.

use std::path::Path;

use clap::Parser;
use console::Term;
use tracing::debug;

use agrocat::api::CatalogApi;
use agrocat::commands::config::ConfigAction;
use agrocat::commands::list::{parse_filter_arg, ListQuery};
use agrocat::commands::{CmdMessage, CmdResult};
use agrocat::config::{self, AgrocatConfig, ColorChoice};
use agrocat::error::Result;
use agrocat::logging;
use agrocat::model::{CatalogKind, ViewMode};
use agrocat::schema::{SortContext, SortKey};
use agrocat::store::{CatalogSource, DirSource, EmbeddedSource};

use super::render::{render_config, render_facets, render_item, render_listing, render_messages};
use super::setup::{Cli, Commands};

struct AppContext {
    api: CatalogApi<Box<dyn CatalogSource>>,
    sort_ctx: SortContext,
    color: Option<ColorChoice>,
}

impl AppContext {
    fn use_color(&self) -> bool {
        resolve_color(self.color, self.api.config())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let home = config::home_dir()?;
    debug!("agrocat home: {}", home.display());

    match cli.command {
        // Config reads the file without range checks so a bad value can be overwritten.
        Commands::Config { key, value } => {
            let config = AgrocatConfig::load_unchecked(&home)?;
            let mut ctx = init_context(cli.color, config, &home);
            handle_config(&mut ctx, key, value)
        }
        Commands::List {
            catalog,
            search,
            filters,
            sort,
            page,
            view,
            json,
        } => {
            let ctx = init_context(cli.color, AgrocatConfig::load(&home)?, &home);
            handle_list(&ctx, catalog, search, filters, sort, page, view, json)
        }
        Commands::Show { catalog, id, json } => {
            let ctx = init_context(cli.color, AgrocatConfig::load(&home)?, &home);
            handle_show(&ctx, catalog, &id, json)
        }
        Commands::Filters { catalog, json } => {
            let ctx = init_context(cli.color, AgrocatConfig::load(&home)?, &home);
            handle_filters(&ctx, catalog, json)
        }
    }
}

/// Catalogs are read on first use, so building the context never fails.
fn init_context(color: Option<ColorChoice>, config: AgrocatConfig, home: &Path) -> AppContext {
    let source: Box<dyn CatalogSource> = match &config.data_dir {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(EmbeddedSource::new()),
    };
    let api = CatalogApi::new(source, config, home);
    debug!("catalog source: {}", api.source().describe());

    AppContext {
        api,
        sort_ctx: SortContext::now(),
        color,
    }
}

fn resolve_color(flag: Option<ColorChoice>, config: &AgrocatConfig) -> bool {
    match flag.unwrap_or(config.color) {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => Term::stdout().features().colors_supported(),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_list(
    ctx: &AppContext,
    kind: CatalogKind,
    search: String,
    filters: Vec<String>,
    sort: Option<SortKey>,
    page: Option<usize>,
    view: Option<ViewMode>,
    json: bool,
) -> Result<()> {
    let filters = filters
        .iter()
        .map(|arg| parse_filter_arg(arg))
        .collect::<Result<Vec<_>>>()?;
    let query = ListQuery {
        search,
        filters,
        sort,
        page,
        view,
    };

    let result = ctx.api.list(kind, &query, &ctx.sort_ctx)?;
    let Some(listing) = &result.listing else {
        return Ok(());
    };

    if json {
        print_json(listing)?;
        print_messages_to_stderr(&result.messages, ctx.use_color());
    } else {
        print_messages_to_stderr(&result.messages, ctx.use_color());
        print!("{}", render_listing(listing, ctx.sort_ctx.today, ctx.use_color()));
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, kind: CatalogKind, id: &str, json: bool) -> Result<()> {
    let result = ctx.api.show(kind, id)?;
    if let Some(item) = &result.item {
        if json {
            print_json(item)?;
        } else {
            print!("{}", render_item(item, ctx.sort_ctx.today, ctx.use_color()));
        }
    }
    Ok(())
}

fn handle_filters(ctx: &AppContext, kind: CatalogKind, json: bool) -> Result<()> {
    let result = ctx.api.facets(kind)?;
    if let Some(facets) = &result.facets {
        if json {
            print_json(facets)?;
        } else {
            print!("{}", render_facets(facets, ctx.use_color()));
        }
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config_action(action)?;
    let use_color = ctx.use_color();
    if show_all {
        if let Some(config) = &result.config {
            let path = ctx.api.config_dir().join("config.json");
            let location = format!("config: {}", path.display());
            print!("{}", render_config(config, &location, use_color));
        }
    }
    print_messages(&result, use_color);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{}", out);
    Ok(())
}

fn print_messages(result: &CmdResult, use_color: bool) {
    print!("{}", render_messages(&result.messages, use_color));
}

fn print_messages_to_stderr(messages: &[CmdMessage], use_color: bool) {
    eprint!("{}", render_messages(messages, use_color));
}
