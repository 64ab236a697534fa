use anyhow::Result;
use clap::Parser;
use ktab_table::{ColumnVisibility, Pager, SortState, TableView};
use tracing::{error, info, warn};

pub mod cli;
pub mod config;
pub mod render;
pub mod rows;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = ktab_common::logging::initialize(config::APP_NAME)?;
    info!("{} v{} started", config::APP_NAME, config::APP_VERSION);

    if let Err(error) = run(&args) {
        error!("{} v{} terminated with an error: {}", config::APP_NAME, config::APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", config::APP_NAME, config::APP_VERSION);
        Ok(())
    }
}

fn run(args: &cli::Args) -> Result<()> {
    let config = config::Config::load_or_create()?;
    let snapshot = rows::Snapshot::load(&args.snapshot)?;
    info!("loaded {} rows of kind '{}'", snapshot.rows.len(), snapshot.kind);

    // free-text search is applied upstream, the engine does not own it
    let mut list = snapshot.rows;
    if let Some(search) = args.search.as_deref() {
        list.retain(|row| row.contains(search));
    }

    let sort = args.sort_state(SortState::new(config.sort_key.clone(), config.sort_order))?;
    let mut table = TableView::new(list, rows::column_specs(), sort);

    for (column, values) in args.column_filters()? {
        if !table.set_column_filter(&column, Some(values)) {
            warn!("filter for unknown column '{}' ignored", column);
        }
    }

    if args.facets {
        print!("{}", render::render_facets(&table));
        return Ok(());
    }

    let mut visibility = ColumnVisibility::from_hidden(config.hidden_columns.iter().map(String::as_str));
    for column in &args.hidden {
        visibility.hide(column);
    }

    let page_size = args.page_size.unwrap_or(config.page_size);
    let mut pager = Pager::with_index(page_size, args.page.saturating_sub(1));
    print!("{}", render::render_page(&table, &visibility, &mut pager));

    Ok(())
}
