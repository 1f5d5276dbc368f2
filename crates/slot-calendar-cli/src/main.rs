use std::process;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Month, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use slot_calendar::{
    compute_current_period_with_options, compute_valid_days_for_week_with_options,
    month_from_number, parse_date, reconcile_allocations, today_in_timezone, Allocation,
    SlotConfig, SlotController, SlotGrid, SlotOptions, WeekStart,
};
use tracing_subscriber::EnvFilter;

mod settings;

use settings::Settings;

/// slotcal - week-of-month visit slot planner
#[derive(Parser)]
#[command(name = "slotcal", version)]
#[command(about = "Print week-of-month visit slot pickers", long_about = None)]
struct Cli {
    /// Path to configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Day that starts the week: sunday or monday (overrides config)
    #[arg(long, global = true)]
    week_start: Option<WeekStart>,

    /// Reference date as YYYY-MM-DD (default: today in --timezone)
    #[arg(long, global = true)]
    today: Option<String>,

    /// IANA timezone used for "today" (overrides config)
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slot picker for a month
    Grid {
        /// Month number 1-12 (default: reference month)
        #[arg(long)]
        month: Option<u32>,

        /// Year (default: reference year)
        #[arg(long)]
        year: Option<i32>,

        /// Week of month to select
        #[arg(long)]
        week: Option<u32>,

        /// Day of week to select (1-7 from the week start)
        #[arg(long)]
        day: Option<u32>,

        /// Disable slots before the reference date
        #[arg(long)]
        past_disabled: bool,

        /// Treat months before the reference month as past and later months as open
        #[arg(long)]
        month_aware_past: bool,

        /// Highest selectable week (overrides config)
        #[arg(long)]
        max_week: Option<u32>,
    },
    /// Print the week and day of the reference date
    Period,
    /// List the days of one week bucket
    Week {
        /// Week of month
        #[arg(long)]
        week: u32,

        /// Month number 1-12 (default: reference month)
        #[arg(long)]
        month: Option<u32>,

        /// Year (default: reference year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Check liquidation quantities against available stock
    Allocate {
        /// Available stock
        #[arg(long)]
        available: u32,

        /// Allocations as DOCTOR=QUANTITY
        #[arg(required = true)]
        allocations: Vec<String>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("failed to load config")?;
    init_logging(&settings.log_level);

    let options = SlotOptions::new(cli.week_start.unwrap_or(settings.week_start));
    let timezone = cli.timezone.clone().unwrap_or_else(|| settings.timezone.clone());

    match cli.command {
        Commands::Grid {
            month,
            year,
            week,
            day,
            past_disabled,
            month_aware_past,
            max_week,
        } => {
            let today = resolve_today(cli.today.as_deref(), &timezone)?;
            let (month, year) = resolve_month(month, year, today)?;
            let config = SlotConfig::new(month, year)
                .with_past_disabled(past_disabled || settings.past_disabled)
                .with_month_aware_past(month_aware_past || settings.month_aware_past)
                .with_max_week(max_week.unwrap_or(settings.max_week))
                .with_options(options);
            let mut controller = SlotController::for_today(config, today);
            if let Some(week) = week {
                if !controller.set_week(week) {
                    tracing::info!(week, "week selection left unchanged");
                }
            }
            if let Some(day) = day {
                if !controller.set_day(day) {
                    tracing::info!(day, "day selection left unchanged");
                }
            }
            let grid = SlotGrid::build(&controller);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{grid}");
            }
        }
        Commands::Period => {
            let today = resolve_today(cli.today.as_deref(), &timezone)?;
            let period = compute_current_period_with_options(today, &options);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&period)?);
            } else {
                println!(
                    "{}: week {}, day {} of {} {} (week starts {})",
                    today.format("%a %Y-%m-%d"),
                    period.week,
                    period.day,
                    period.month.name(),
                    period.year,
                    options.week_start
                );
            }
        }
        Commands::Week { week, month, year } => {
            let (month, year) = match (month, year) {
                (Some(m), Some(y)) => (month_from_number(m)?, y),
                (m, y) => {
                    let today = resolve_today(cli.today.as_deref(), &timezone)?;
                    resolve_month(m, y, today)?
                }
            };
            let slots = compute_valid_days_for_week_with_options(week, month, year, &options);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("Week {week} of {} {year} has no days", month.name());
            } else {
                for slot in &slots {
                    println!("{} {}  {}", slot.day_of_week, slot.date, slot.label);
                }
            }
        }
        Commands::Allocate {
            available,
            allocations,
        } => {
            let allocations = allocations
                .iter()
                .map(|s| parse_allocation(s))
                .collect::<Result<Vec<_>>>()?;
            let summary = reconcile_allocations(available, &allocations)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Allocated {} of {} to {} doctor(s), {} remaining",
                    summary.allocated, summary.available, summary.doctors, summary.remaining
                );
            }
        }
    }

    Ok(())
}

fn init_logging(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_today(today: Option<&str>, timezone: &str) -> Result<NaiveDate> {
    match today {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today_in_timezone(Utc::now(), timezone)?),
    }
}

fn resolve_month(
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> Result<(Month, i32)> {
    let month = month_from_number(month.unwrap_or_else(|| today.month()))?;
    Ok((month, year.unwrap_or_else(|| today.year())))
}

fn parse_allocation(s: &str) -> Result<Allocation> {
    let Some((doctor, quantity)) = s.split_once('=') else {
        bail!("allocation must be DOCTOR=QUANTITY: '{s}'");
    };
    let doctor = doctor.trim();
    if doctor.is_empty() {
        bail!("allocation is missing a doctor id: '{s}'");
    }
    let quantity: u32 = quantity
        .trim()
        .parse()
        .with_context(|| format!("invalid quantity in '{s}'"))?;
    Ok(Allocation::new(doctor, quantity))
}
