//! Command dispatch

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::BookingOrder;
use crate::cli::args::{Cli, Commands, ConfigCommands, ScanOrder};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{expand_path, global_config_path, Settings};
use crate::domain::Ticket;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::FixedClock;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Reserve {
            places,
            location,
            search_preference,
            lodge_only,
            venue,
            date,
            json,
        }) => {
            let settings = Settings::load(cli.config.as_deref())?;
            let order = build_order(*places, location, *search_preference, *lodge_only)?;
            reserve(settings, order, venue.as_deref(), *date, *json)
        }
        Some(Commands::Config { command }) => config(cli.config.as_deref(), command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "seatalloc", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage("no command given, see --help".to_string())),
    }
}

fn build_order(
    places: u32,
    location: &str,
    search_preference: Option<ScanOrder>,
    lodge_only: bool,
) -> CliResult<BookingOrder> {
    let mut order = BookingOrder::parse(places, location)?.lodge_only(lodge_only);
    if let Some(scan_order) = search_preference {
        order = order.with_preference(scan_order.into());
    }
    Ok(order)
}

#[instrument(skip(settings))]
fn reserve(
    mut settings: Settings,
    order: BookingOrder,
    venue: Option<&Path>,
    date: Option<NaiveDate>,
    json: bool,
) -> CliResult<()> {
    if let Some(path) = venue {
        settings.venue_file = Some(expand_path(path));
    }
    match &settings.venue_file {
        Some(path) => debug!("venue file: {}", path.display()),
        None => output::warning("no venue file configured, venue is empty"),
    }

    let mut container = ServiceContainer::new(settings);
    if let Some(day) = date {
        container.clock = Arc::new(FixedClock(day));
    }
    let service = container.booking_service();

    if json {
        let ticket = service.find(&order)?;
        write_json(&mut io::stdout().lock(), &ticket)?;
    } else {
        service.book(&order)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, ticket: &Ticket) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, ticket)
        .map_err(io::Error::from)
        .and_then(|()| writeln!(out))
        .map_err(|e| InfraError::io("write ticket as JSON", e))?;
    Ok(())
}

#[instrument]
fn config(config_file: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config_file)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::action("global", &path.display()),
            None => output::warning("no home directory, global config disabled"),
        },
    }
    Ok(())
}
