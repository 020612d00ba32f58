//! rusty-fx CLI - Command-line interface for currency conversion
//!
//! ## Example Usage
//!
//! ```bash
//! # One-off conversion
//! rusty-fx convert 100 USD EUR
//!
//! # Negative amounts and JSON output
//! rusty-fx convert -25 gbp usd --json
//!
//! # Prompt loop, using rates from a CSV file
//! rusty-fx --rates rates.csv interactive
//!
//! # Show the loaded rate table
//! rusty-fx rates
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_fx::config::Config;
use rusty_fx::currency::CurrencyCode;
use rusty_fx::demo::run_demo;
use rusty_fx::fx::{ConversionRequest, RateResolver, RateTable};
use rusty_fx::session::Session;
use std::io;
use std::path::PathBuf;
use std::process;

/// rusty-fx: currency conversion with direct, inverse and bridged rates
#[derive(Parser)]
#[command(name = "rusty-fx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "Currency conversion with direct, inverse and bridged rates", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV rate file (from,to,rate), overrides the configured one
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Base currency for bridged conversions
    #[arg(long, global = true)]
    base: Option<String>,

    /// Reject same-currency conversions for currencies missing from the table
    #[arg(long, global = true)]
    strict_identity: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single amount
    Convert {
        /// Amount to convert
        #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: f64,

        /// Source currency code
        #[arg(value_name = "FROM")]
        from: String,

        /// Target currency code
        #[arg(value_name = "TO")]
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read "<amount> <from> <to>" lines until 'quit'
    Interactive,

    /// Run the sample conversions
    Demo,

    /// List the loaded rates
    Rates,
}

struct AppContext {
    resolver: RateResolver<RateTable>,
    precision: usize,
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn build_context(cli: &Cli) -> Result<AppContext> {
    let mut config = Config::load(cli.config.as_deref());

    if let Some(ref base) = cli.base {
        config.base_currency =
            CurrencyCode::new(base).with_context(|| format!("invalid base currency '{}'", base))?;
    }
    if cli.strict_identity {
        config.strict_identity = true;
    }

    let table = config
        .rate_table(cli.rates.as_deref())
        .context("failed to load rates")?;
    log::debug!(
        "Loaded {} rates across {} currencies",
        table.len(),
        table.currencies().len()
    );

    Ok(AppContext {
        resolver: RateResolver::with_options(table, config.resolver_options()),
        precision: config.precision,
        verbose: cli.verbose,
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_context(&cli).and_then(|ctx| {
        if ctx.verbose {
            println!(
                "{} v{}",
                "rusty-fx".cyan().bold(),
                env!("CARGO_PKG_VERSION")
            );
            println!(
                "Base currency: {}",
                ctx.resolver.base_currency().to_string().dimmed()
            );
        }

        match &cli.command {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => convert(&ctx, *amount, from, to, *json),
            Commands::Interactive => interactive(&ctx),
            Commands::Demo => demo(&ctx),
            Commands::Rates => list_rates(&ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn convert(ctx: &AppContext, amount: f64, from: &str, to: &str, json: bool) -> Result<()> {
    let request = ConversionRequest::new(amount, CurrencyCode::new(from)?, CurrencyCode::new(to)?);
    let conversion = ctx.resolver.resolve(&request)?;

    if json {
        println!("{}", conversion.to_json()?);
        return Ok(());
    }

    println!("{}", conversion.format_with_precision(ctx.precision).bright_green());
    if ctx.verbose {
        println!("  {} {}", "Route:".bold(), conversion.route);
    }
    Ok(())
}

fn interactive(ctx: &AppContext) -> Result<()> {
    println!("{}", "Interactive Currency Converter:".cyan().bold());
    println!("Enter 'quit' to exit");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(&ctx.resolver)
        .with_precision(ctx.precision)
        .run(stdin.lock(), stdout.lock())?;

    if ctx.verbose {
        println!(
            "{} {} converted, {} failed",
            "Session:".bold(),
            summary.converted,
            summary.failed
        );
    }
    Ok(())
}

fn demo(ctx: &AppContext) -> Result<()> {
    let failed = run_demo(&ctx.resolver, ctx.precision, io::stdout().lock())?;
    if failed > 0 {
        println!(
            "{} {} of the sample conversions failed",
            "Warning:".yellow(),
            failed
        );
    }
    Ok(())
}

fn list_rates(ctx: &AppContext) -> Result<()> {
    let table = ctx.resolver.source();

    println!("{}", "Loaded Rates".cyan().bold());
    println!("{}", "============".cyan());
    if table.is_empty() {
        println!("{}", "  No rates loaded.".dimmed());
        return Ok(());
    }

    for (pair, rate) in table.pairs() {
        println!("  {:<10} {}", pair.to_string().bold(), rate);
    }
    println!();

    let currencies: Vec<String> = table.currencies().iter().map(|c| c.to_string()).collect();
    println!("  {} {}", "Currencies:".bold(), currencies.join(", "));
    println!("  {} {}", "Base:".bold(), ctx.resolver.base_currency());
    Ok(())
}
