//! sqlweave: render and run SELECTs from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the SQL for a model in a dialect
//! sqlweave render --model User --dialect mssql --where '{"active": true}' --limit 10
//!
//! # Placeholders plus bind values
//! sqlweave render --model User --where '{"id": {"in": [1, 2]}}' --params
//!
//! # Execute against a database
//! sqlweave run --model User --query users.json --database-url sqlite://app.db
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::*;
use serde_json::Value as JsonValue;
use sqlweave::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlweave")]
#[command(version)]
#[command(about = "Dialect-aware SELECT compiler", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlweave render --model User --where '{\"active\": true}' --limit 10
    sqlweave render --model User --dialect mssql --order created_at:desc --params
    sqlweave run --model User --query users.json --database-url sqlite://app.db")]
struct Cli {
    /// Config file (defaults to <config dir>/sqlweave/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SQL for a query
    Render {
        #[command(flatten)]
        query: QueryArgs,

        /// Render bind placeholders and list the values separately
        #[arg(short, long)]
        params: bool,
    },
    /// Execute a query and print the rows
    Run {
        #[command(flatten)]
        query: QueryArgs,

        /// Database connection URL
        #[arg(long, env = "SQLWEAVE_DATABASE_URL")]
        database_url: String,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List available dialects
    Dialects,
    /// List configured models
    Models,
}

#[derive(Args)]
struct QueryArgs {
    /// Model name from the config file
    #[arg(short, long)]
    model: String,

    /// Target dialect (falls back to the configured default, then postgres)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Projected columns
    #[arg(short, long, value_delimiter = ',')]
    attributes: Option<Vec<String>>,

    /// Filter description as JSON
    #[arg(short = 'w', long = "where")]
    filter: Option<String>,

    /// ORDER BY item as `column[:asc|desc]`, repeatable
    #[arg(short, long)]
    order: Vec<String>,

    #[arg(short, long)]
    limit: Option<u64>,

    #[arg(long)]
    offset: Option<u64>,

    /// JSON query file; command-line options are applied on top
    #[arg(short, long)]
    query: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SQLWEAVE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = dispatch(&cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;

    match &cli.command {
        Commands::Render { query, params } => {
            let builder = build_query(&config, query)?;
            if *params {
                print_statement(&builder.get_query_with_params()?);
            } else {
                println!("{}", builder.get_query()?);
            }
        }
        Commands::Run {
            query,
            database_url,
            json,
        } => {
            let builder = build_query(&config, query)?;
            if cli.verbose {
                println!("{} {}", "Connecting to:".dimmed(), database_url);
            }
            let executor = SqlxExecutor::connect(database_url).await?;
            let output = builder.execute_bound(&executor).await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&output.rows)?);
            } else {
                print_table(&output);
            }
        }
        Commands::Dialects => show_dialects(&config),
        Commands::Models => show_models(&config)?,
    }

    Ok(())
}

fn build_query(config: &Config, args: &QueryArgs) -> Result<QueryBuilder> {
    let model = config.model(&args.model)?;
    let dialect = config.dialect(args.dialect.as_deref())?;
    let base = QueryBuilder::new(model, dialect);

    let mut builder = match &args.query {
        Some(path) => read_query_file(path)?.apply(&base)?,
        None => base.select(),
    };

    if let Some(attrs) = &args.attributes {
        builder = builder.attributes(attrs.iter().map(String::as_str));
    }
    if let Some(text) = &args.filter {
        let filter: JsonValue = serde_json::from_str(text).context("parsing --where")?;
        builder = builder.filter_json(&filter)?;
    }
    for item in &args.order {
        let (column, order) = parse_order(item)?;
        builder = builder.order_by(column, order);
    }
    if let Some(n) = args.limit {
        builder = builder.limit(n);
    }
    if let Some(n) = args.offset {
        builder = builder.offset(n);
    }

    Ok(builder)
}

fn read_query_file(path: &Path) -> Result<QuerySpec> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(QuerySpec::from_json(&text)?)
}

fn parse_order(item: &str) -> Result<(&str, SortOrder)> {
    let (column, order) = match item.split_once(':') {
        Some((column, dir)) => (column, dir.parse::<SortOrder>().map_err(anyhow::Error::msg)?),
        None => (item, SortOrder::Asc),
    };
    if column.is_empty() {
        bail!("empty column in --order '{}'", item);
    }
    Ok((column, order))
}

fn print_statement(statement: &Statement) {
    println!("{}", statement.sql);
    if statement.params.is_empty() {
        return;
    }
    println!();
    println!("{}", "Bindings:".cyan());
    for (i, value) in statement.params.iter().enumerate() {
        println!("  {} = {}", (i + 1).to_string().dimmed(), value.to_string().yellow());
    }
}

fn print_table(output: &QueryOutput) {
    if output.rows.is_empty() {
        println!("{}", "(no results)".dimmed());
        return;
    }

    let cells: Vec<Vec<String>> = output
        .rows
        .iter()
        .map(|row| {
            output
                .columns
                .iter()
                .map(|c| row.get(c).map(val_to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = output.columns.iter().map(|c| c.len()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let header: Vec<String> = output
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:width$}", c, width = *w))
        .collect();
    println!("{}", header.join(" │ ").white().bold());

    let sep: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    println!("{}", sep.join("─┼─").dimmed());

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:width$}", cell, width = *w))
            .collect();
        println!("{}", line.join(" │ "));
    }

    println!();
    println!("{} row(s) returned", output.rows.len().to_string().cyan());
}

fn val_to_string(val: &JsonValue) -> String {
    match val {
        JsonValue::Null => "NULL".to_string(),
        JsonValue::String(s) => s.clone(),
        _ => val.to_string(),
    }
}

fn show_dialects(config: &Config) {
    println!(
        "{:12} {:8} {:10} {:14} {}",
        "Dialect".white().bold(),
        "Quotes".white().bold(),
        "Booleans".white().bold(),
        "Pagination".white().bold(),
        "Case-insensitive LIKE".white().bold()
    );
    println!("{}", "─".repeat(70).dimmed());

    let builtins = Dialect::ALL.iter().map(|d| d.descriptor());
    for d in builtins.chain(config.dialects.iter().cloned()) {
        let (open, close) = d.identifier_quote;
        println!(
            "{:12} {:8} {:10} {:14} {}",
            d.name.cyan().bold(),
            format!("{}x{}", open, close),
            format!("{:?}", d.boolean_style).to_lowercase(),
            format!("{:?}", d.pagination).to_lowercase(),
            format!("{:?}", d.case_insensitive_like).to_lowercase().dimmed()
        );
    }
}

fn show_models(config: &Config) -> Result<()> {
    if config.models.is_empty() {
        println!(
            "{}",
            "⚠ No models configured. Use --config or create the default config file".yellow()
        );
        return Ok(());
    }

    for entry in &config.models {
        let model = entry.build()?;
        println!(
            "{} {} {}",
            model.name().cyan().bold(),
            "→".dimmed(),
            model.table_name().white()
        );
        for column in model.columns() {
            let marker = if column.name == model.primary_key() { "*" } else { " " };
            println!("  {}{} {}", marker.yellow(), column.name, column.ty.to_string().dimmed());
        }
    }
    Ok(())
}
