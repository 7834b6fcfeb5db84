use anyhow::Result;
use clap::{CommandFactory, Parser};
use shelf_cli::handlers;
use shelf_cli::{Cli, Commands, JsonSettingsRepository, SettingsCommand};
use shelf_core::ListSettingsUpdate;
use shelf_gui::ViewContext;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load environment variables (RUST_LOG, SHELF_SETTINGS)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repo = cli.settings.as_ref().map(JsonSettingsRepository::new);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Describe { screen } => handlers::describe::execute(screen)?,
        Commands::Decide {
            screen,
            snapshot,
            header,
            registry_empty,
        } => handlers::decide::execute(
            screen,
            &snapshot,
            ViewContext {
                has_header: header,
                registry_empty,
            },
        )?,
        Commands::Simulate {
            screen,
            total,
            fail_first,
            json,
        } => {
            let settings = handlers::settings::load(repo.as_ref())?;
            handlers::simulate::execute(screen, total, fail_first, json, settings)?;
        }
        Commands::Settings { command } => match command {
            SettingsCommand::Show => handlers::settings::show(repo.as_ref())?,
            SettingsCommand::Validate => handlers::settings::validate(repo.as_ref())?,
            SettingsCommand::Set {
                page_size,
                explore_tab,
                rearm_on_growth,
            } => {
                let update = ListSettingsUpdate {
                    page_size: page_size.map(Some),
                    explore_tab_index: explore_tab.map(Some),
                    sentinel_rearm_on_growth: rearm_on_growth.map(Some),
                };
                handlers::settings::set(repo.as_ref(), &update)?;
            }
        },
    }

    Ok(())
}
