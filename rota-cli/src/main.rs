use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rota_core::{PlanRequest, split_list};
use rota_store::{BaseSource, WeeklyRun};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ROTA_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "rota", version, long_version = LONG_VERSION, about = "Weekly chore rotation")]
struct Cli {
    /// Config file (default: ./rota.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign this week's chores and save a new dated plan
    Plan {
        /// Due date of the new plan (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,

        /// Comma-separated list of people who are away
        #[arg(long, default_value = "")]
        absent: String,

        /// Comma-separated shopping list written next to the due date
        #[arg(long, default_value = "")]
        buy: String,

        /// Seed the tie-break generator for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Skip copying the plan to the publish path
        #[arg(long)]
        no_publish: bool,
    },

    /// Show how many chores each person has completed so far
    Tally,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rota=info,rota_core=info,rota_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;
    tracing::debug!(config = ?cli.config, tie_break = ?cfg.assignment.tie_break, "configuration loaded");

    match cli.command {
        Command::Plan {
            due,
            absent,
            buy,
            seed,
            no_publish,
        } => {
            let run = WeeklyRun::new(cfg.paths(!no_publish), cfg.settings()?);
            let request = PlanRequest {
                due,
                absent: split_list(&absent),
                items: split_list(&buy),
            };
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };

            let report = run.run(&request, &mut rng)?;

            println!("✔ Plan created: {}", report.saved.display());
            match &report.source {
                BaseSource::Template(p) => println!("  base: template {}", p.display()),
                BaseSource::Previous { date, .. } => println!("  base: plan of {date}"),
            }
            for a in &report.assignments {
                println!("  {} -> {}", a.label, a.person);
            }
            if let Some(p) = &report.published {
                println!("  published: {}", p.display());
            }
        }

        Command::Tally => {
            let run = WeeklyRun::new(cfg.paths(false), cfg.settings()?);
            let tally = run.tally()?;

            println!("Completed chores ({})\n", tally.source.path().display());
            let width = tally.counts.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
            for (name, n) in tally.counts.iter() {
                println!("  {name:<width$}  {n}");
            }
        }
    }

    Ok(())
}
