//! Terminal front-end for the website directory.
//!
//! # Usage
//!
//! ```bash
//! # List websites, optionally filtered and sorted
//! site-directory list --search pay --status active --sort updated --desc
//!
//! # Show one record
//! site-directory show website-2
//!
//! # Print a blank form, fill it in, then create the record
//! site-directory template > new.json
//! site-directory create --file new.json
//!
//! # Machine-readable output; failures print {"error": {...}}
//! site-directory validate --file new.json --json
//!
//! # Change some fields of a record
//! site-directory edit website-2 --data '{"status": "inactive"}'
//!
//! # Remove a record / restore the sample records
//! site-directory delete website-2
//! site-directory reset --yes
//! ```
//!
//! Configuration comes from the environment (and `.env`), see
//! [`site_directory::config`].

use site_directory::application::services::{
    DirectorySummary, ListQuery, SortDirection, SortKey, WebsiteStore, apply_query,
    directory_view::excerpt, merge_form_patch, pricing_label,
};
use site_directory::bootstrap::{open_store, submission_service};
use site_directory::config::{self, Config};
use site_directory::domain::entities::{
    CATEGORIES, CURRENCIES, PricingKind, Website, WebsiteFormData, WebsiteStatus,
};
use site_directory::domain::schema::{ValidationReport, validate};
use site_directory::error::AppError;
use site_directory::utils::url_check::display_host_path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde_json::{Value, json};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Manage a directory of partner websites.
#[derive(Parser)]
#[command(name = "site-directory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List websites
    List {
        #[command(flatten)]
        filter: ListArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one website
    Show {
        id: String,

        /// Print JSON instead of a summary (errors as a JSON body too)
        #[arg(long)]
        json: bool,
    },

    /// Create a website from a JSON form payload
    Create {
        #[command(flatten)]
        input: InputArgs,

        /// Print the created record, or the error body, as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a website by merging a JSON patch onto its current values
    Edit {
        id: String,

        #[command(flatten)]
        input: InputArgs,

        /// Print the updated record, or the error body, as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a website
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show directory counters
    Stats,

    /// Validate a JSON form payload without saving it
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// Print the normalized form, or the error body, as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a blank form payload to fill in
    Template,

    /// Replace the directory with the sample websites
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive text matched against name, URL, description and category
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// active, inactive or pending
    #[arg(long)]
    status: Option<WebsiteStatus>,

    /// free, paid or freemium
    #[arg(long)]
    pricing: Option<PricingKind>,

    /// name, updated, created, category or status
    #[arg(long, default_value = "stored")]
    sort: SortKey,

    /// Sort descending
    #[arg(long)]
    desc: bool,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            search: args.search,
            category: args.category,
            status: args.status,
            pricing: args.pricing,
            sort: args.sort,
            direction: if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }
}

/// Where a JSON payload comes from. Reads stdin when neither is given.
#[derive(Args)]
struct InputArgs {
    /// Read the payload from a file
    #[arg(short, long, conflicts_with = "data")]
    file: Option<PathBuf>,

    /// Inline JSON payload
    #[arg(short, long)]
    data: Option<String>,
}

impl InputArgs {
    fn read_json(&self) -> Result<Value> {
        let raw = match (&self.file, &self.data) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, Some(data)) => data.clone(),
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read payload from stdin")?;
                buf
            }
        };

        serde_json::from_str(&raw).context("Payload is not valid JSON")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let store = open_store(&config).await;

    match cli.command {
        Commands::List { filter, json } => list_websites(&store, filter.into(), json).await?,
        Commands::Show { id, json } => show_website(&store, &id, json).await?,
        Commands::Create { input, json } => create_website(&config, store, &input, json).await?,
        Commands::Edit { id, input, json } => {
            edit_website(&config, store, &id, &input, json).await?
        }
        Commands::Delete { id, yes } => delete_website(&store, &id, yes).await?,
        Commands::Stats => show_stats(&store).await,
        Commands::Validate { input, json } => validate_payload(&input, json)?,
        Commands::Template => print_template()?,
        Commands::Reset { yes } => reset_directory(&store, yes).await?,
    }

    Ok(())
}

/// Initializes `tracing` on stderr so command output stays clean on stdout.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn list_websites(store: &WebsiteStore, query: ListQuery, json: bool) -> Result<()> {
    let rows = apply_query(store.list().await, &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "📋 Websites".bright_blue().bold());
    println!();

    if rows.is_empty() {
        println!("{}", "  No websites found".yellow());
        println!();
        println!(
            "  Create one with: {} create --file website.json",
            "site-directory".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<22} {:<28} {:<12} {:<9} {:<10} {:<16}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Category".bright_white().bold(),
        "Status".bright_white().bold(),
        "Pricing".bright_white().bold(),
        "Updated".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for website in &rows {
        println!(
            "  {:<22} {:<28} {:<12} {:<9} {:<10} {}",
            website.id.bright_black(),
            website.name.cyan(),
            website.category,
            status_label(website.status),
            pricing_label(&website.offers.pricing),
            website
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
        println!(
            "  {:<22} {}",
            "",
            format!(
                "{}  {}",
                display_host_path(&website.url),
                excerpt(&website.description, 50)
            )
            .bright_black()
        );
    }

    println!();
    println!(
        "  Showing: {} of {}",
        rows.len().to_string().bright_white().bold(),
        store.len().await
    );
    println!();

    Ok(())
}

async fn show_website(store: &WebsiteStore, id: &str, json: bool) -> Result<()> {
    let Some(website) = store.set_current(Some(id)).await else {
        return Err(report_failure(not_found(id), json));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&website)?);
    } else {
        print_website(&website);
    }

    Ok(())
}

fn print_website(website: &Website) {
    let specs = &website.article_specs;

    println!("{}", website.name.bright_blue().bold());
    println!("  ID:          {}", website.id.bright_black());
    println!("  URL:         {}", website.url.cyan());
    println!("  Category:    {}", website.category);
    println!("  Status:      {}", status_label(website.status));
    println!("  Created:     {}", website.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Updated:     {}", website.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("  {}", website.description);
    println!();
    println!("{}", "Offers".bright_white().bold());
    println!("  Pricing:     {}", pricing_label(&website.offers.pricing));
    println!("  Features:    {}", website.offers.features.join(", "));
    println!("  Audience:    {}", website.offers.target_audience.join(", "));
    println!("  USPs:        {}", website.offers.unique_selling_points.join(", "));
    println!();
    println!("{}", "Article specs".bright_white().bold());
    println!("  Content:     {}", specs.content_types.join(", "));
    println!(
        "  Words:       {} - {}",
        specs.word_count_range.min, specs.word_count_range.max
    );
    println!("  Tone:        {}", specs.tone_of_voice.join(", "));
    println!("  Sections:    {}", specs.required_sections.join(", "));
    println!(
        "  SEO ({}/3):   meta description {}, keywords {}, heading structure {}",
        specs.seo_requirements.enabled_count(),
        yes_no(specs.seo_requirements.meta_description),
        yes_no(specs.seo_requirements.keywords),
        yes_no(specs.seo_requirements.heading_structure)
    );
    println!("  Guidelines:  {}", specs.submission_guidelines);
    println!();
}

async fn create_website(
    config: &Config,
    store: Arc<WebsiteStore>,
    input: &InputArgs,
    json: bool,
) -> Result<()> {
    let payload = input.read_json()?;
    let service = submission_service(config, store);

    match service.submit_create(&payload).await {
        Ok(website) if json => {
            println!("{}", serde_json::to_string_pretty(&website)?);
            Ok(())
        }
        Ok(website) => {
            println!(
                "{} {}",
                "✅ Website created:".green().bold(),
                website.id.bright_white()
            );
            Ok(())
        }
        Err(e) => Err(report_failure(e, json)),
    }
}

async fn edit_website(
    config: &Config,
    store: Arc<WebsiteStore>,
    id: &str,
    input: &InputArgs,
    json: bool,
) -> Result<()> {
    let Some(existing) = store.get(id).await else {
        return Err(report_failure(not_found(id), json));
    };

    let patch = input.read_json()?;
    let merged = merge_form_patch(&existing.to_form_data(), &patch);
    let service = submission_service(config, store);

    match service.submit_update(id, &merged).await {
        Ok(website) if json => {
            println!("{}", serde_json::to_string_pretty(&website)?);
            Ok(())
        }
        Ok(website) => {
            println!(
                "{} {}",
                "✅ Website updated:".green().bold(),
                website.id.bright_white()
            );
            Ok(())
        }
        Err(e) => Err(report_failure(e, json)),
    }
}

async fn delete_website(store: &WebsiteStore, id: &str, skip_confirm: bool) -> Result<()> {
    let website = store
        .get(id)
        .await
        .with_context(|| format!("Website '{id}' not found"))?;

    println!("  Website: {}", website.name.cyan());
    println!("  ID:      {}", website.id.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this website?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    store.delete(id).await;
    println!("{}", "✅ Website deleted".green().bold());

    Ok(())
}

async fn show_stats(store: &WebsiteStore) {
    let summary = DirectorySummary::from_websites(&store.list().await);

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Total websites: {}",
        summary.total.to_string().bright_green().bold()
    );
    println!(
        "  Active sites:   {} ({}% of total)",
        summary.active.to_string().bright_green().bold(),
        summary.active_percentage()
    );
    println!(
        "  Paid services:  {}",
        summary.paid.to_string().bright_green().bold()
    );
    println!();
}

fn validate_payload(input: &InputArgs, json: bool) -> Result<()> {
    let payload = input.read_json()?;

    match validate(&payload) {
        Ok(form) if json => {
            println!("{}", serde_json::to_string_pretty(&form)?);
            Ok(())
        }
        Ok(_) => {
            println!("{}", "✅ Payload is valid".green().bold());
            Ok(())
        }
        Err(report) => Err(report_failure(AppError::from(report), json)),
    }
}

fn print_template() -> Result<()> {
    let template = WebsiteFormData::default();
    println!("{}", serde_json::to_string_pretty(&template)?);

    eprintln!("{} {}", "Categories:".bright_black(), CATEGORIES.join(", "));
    eprintln!("{} {}", "Currencies:".bright_black(), CURRENCIES.join(", "));
    Ok(())
}

async fn reset_directory(store: &WebsiteStore, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Replace all {} websites with the sample data?",
                store.len().await
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let count = store.reset().await;
    println!(
        "{} {} sample websites",
        "✅ Directory reset:".green().bold(),
        count
    );

    Ok(())
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Website '{id}' not found"), json!({ "id": id }))
}

/// Prints the failure on stdout and converts the error for `main`.
///
/// With `json` the `{"error": {...}}` body is printed; otherwise rejected
/// forms list their field errors.
fn report_failure(error: AppError, json: bool) -> anyhow::Error {
    if json {
        match serde_json::to_string_pretty(&error.to_error_body()) {
            Ok(body) => println!("{body}"),
            Err(e) => return anyhow::anyhow!(e),
        }
    } else if let Some(report) = error.report() {
        print_report(report);
    }
    anyhow::anyhow!(error)
}

fn print_report(report: &ValidationReport) {
    println!("{}", "❌ Form has errors:".red().bold());
    for (path, messages) in report.by_path() {
        for message in messages {
            println!("  {} {}", format!("{path}:").yellow(), message);
        }
    }
    println!();
}

fn status_label(status: WebsiteStatus) -> ColoredString {
    match status {
        WebsiteStatus::Active => "active".green(),
        WebsiteStatus::Inactive => "inactive".red(),
        WebsiteStatus::Pending => "pending".yellow(),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
