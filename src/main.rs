mod pages;
mod shell;
mod terminal;

use bookpro_booking::{BookingWorkflow, ContactField, SimulatedSubmitter, Submitter};
use bookpro_core::catalog;
use bookpro_core::config::{self, Config};
use bookpro_core::message::Page;
use bookpro_core::traits::SystemClock;
use bookpro_core::Locale;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{prelude::*, reload, EnvFilter};

use shell::Shell;
use terminal::TerminalUi;

#[derive(Parser)]
#[command(
    name = "bookpro",
    version,
    about = "BookPro — consulting agency appointment booking"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "BOOKPRO_CONFIG")]
    config: String,

    /// Display language (pt or en). Overrides the configured default.
    #[arg(short, long)]
    lang: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse services and book an appointment interactively (default).
    Book,
    /// List the bookable services.
    Services {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the about page.
    About,
    /// Show the agency's contact details.
    Contact,
    /// Print the calendar-add link for an appointment.
    Link {
        /// Service id (consultation, strategy, review, workshop).
        service: String,
        /// Appointment date, YYYY-MM-DD.
        date: NaiveDate,
        /// Start time, HH:MM on the half hour between 09:00 and 17:30.
        time: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        /// Free-text notes for the consultant.
        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging starts before the config is read so its messages are kept;
    // the configured level applies once it is known.
    let rust_log = std::env::var("RUST_LOG").ok();
    let (filter, log_level) =
        reload::Layer::new(EnvFilter::new(filter_directives(rust_log.as_deref(), "info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut cfg = config::load(&cli.config)?;
    log_level.reload(EnvFilter::new(filter_directives(
        rust_log.as_deref(),
        &cfg.bookpro.log_level,
    )))?;
    if let Some(lang) = cli.lang {
        cfg.bookpro.default_locale = lang;
    }

    let ui = Arc::new(TerminalUi::default());
    let mut shell = Shell::new(&cfg, build_workflow(&cfg, ui.clone()), ui.clone());

    match cli.command.unwrap_or(Commands::Book) {
        Commands::Book => terminal::run(&mut shell, &ui).await?,
        Commands::Services { json } => {
            if json {
                let services = catalog::list_services(shell.locale());
                println!("{}", serde_json::to_string_pretty(&services)?);
            } else {
                print!("{}", shell.render().to_text());
            }
        }
        Commands::About => {
            shell.open(Page::About);
            print!("{}", shell.render().to_text());
        }
        Commands::Contact => {
            shell.open(Page::Contact);
            print!("{}", shell.render().to_text());
        }
        Commands::Link {
            service,
            date,
            time,
            first_name,
            last_name,
            email,
            phone,
            notes,
        } => {
            shell.choose_service(&service)?;
            let wf = shell.workflow_mut();
            wf.select_date(date)?;
            wf.select_time_str(&time)?;
            wf.set_field(ContactField::FirstName, first_name)?;
            wf.set_field(ContactField::LastName, last_name)?;
            wf.set_field(ContactField::Email, email)?;
            wf.set_field(ContactField::Phone, phone.unwrap_or_default())?;
            wf.set_field(ContactField::Message, notes.unwrap_or_default())?;
            match wf.calendar_link() {
                Some(link) => println!("{link}"),
                None => anyhow::bail!("date and time are required for a calendar link"),
            }
        }
    }

    Ok(())
}

/// Log filter directives: `RUST_LOG` wins over the configured level.
fn filter_directives(rust_log: Option<&str>, configured: &str) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => configured.to_string(),
    }
}

/// Wire the booking workflow to the simulated backend and the terminal.
fn build_workflow(cfg: &Config, ui: Arc<TerminalUi>) -> BookingWorkflow {
    let submitter = SimulatedSubmitter::new(cfg.booking.submit_delay());
    debug!(
        "submitter: {} ({} ms)",
        submitter.name(),
        submitter.delay().as_millis()
    );
    BookingWorkflow::new(Arc::new(submitter), ui, Arc::new(SystemClock))
        .with_calendar(cfg.agency.clone(), cfg.calendar.clone())
}
