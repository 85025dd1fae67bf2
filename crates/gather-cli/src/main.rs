//! gather command-line client
//!
//! Drives the activity store against a running backend. The store is the
//! same context object a UI would hold; each invocation builds one, runs
//! one action, and renders the result.

use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use gather_core::config::DEFAULT_BASE_URL;
use gather_core::{
    ActivitiesApi, Activity, ActivityDraft, ActivityStore, ClientConfig, HttpClient,
};

#[derive(Parser)]
#[command(name = "gather", version, about = "Command-line client for the gather activities API")]
struct Cli {
    /// Backend base URL (defaults to $GATHER_API_URL, then the local dev server)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Artificial per-response latency in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    latency_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all activities, ordered by date
    List {
        /// Group the listing by date
        #[arg(long)]
        grouped: bool,
    },
    /// Show a single activity
    Show { id: String },
    /// Create a new activity
    Create {
        #[arg(long)]
        title: String,
        /// Date (YYYY-MM-DD; a time suffix is truncated)
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        venue: String,
    },
    /// Update fields of an existing activity
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        venue: Option<String>,
    },
    /// Delete an activity
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let base_url = cli
        .url
        .clone()
        .or_else(|| std::env::var("GATHER_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let config = ClientConfig {
        base_url,
        latency: Duration::from_millis(cli.latency_ms),
        ..ClientConfig::default()
    };
    let api = ActivitiesApi::new(HttpClient::new(config));
    let mut store = ActivityStore::new(api);

    match cli.command {
        Command::List { grouped } => {
            store.load_activities().await;
            if store.is_empty() {
                println!("no activities");
                return Ok(());
            }
            if grouped {
                for (date, group) in store.grouped_activities() {
                    println!("{date}");
                    println!("{}", activity_table(&group));
                }
            } else {
                println!("{}", activity_table(&store.activities_by_date()));
            }
        }
        Command::Show { id } => match store.load_activity(&id).await {
            Some(activity) => print_activity(activity),
            None => return Err(format!("activity {id} not found").into()),
        },
        Command::Create {
            title,
            date,
            description,
            category,
            city,
            venue,
        } => {
            let draft = ActivityDraft {
                title,
                date,
                description,
                category,
                city,
                venue,
            };
            match store.create_activity(draft).await {
                Some(created) => println!("created {}", created.id),
                None => return Err("create did not commit".into()),
            }
        }
        Command::Update {
            id,
            title,
            date,
            description,
            category,
            city,
            venue,
        } => {
            let Some(mut activity) = store.load_activity(&id).await.cloned() else {
                return Err(format!("activity {id} not found").into());
            };
            apply(&mut activity.title, title);
            apply(&mut activity.date, date);
            apply(&mut activity.description, description);
            apply(&mut activity.category, category);
            apply(&mut activity.city, city);
            apply(&mut activity.venue, venue);

            match store.update_activity(activity).await {
                Some(updated) => println!("updated {}", updated.id),
                None => return Err("update did not commit".into()),
            }
        }
        Command::Delete { id } => {
            if store.delete_activity(&id).await {
                println!("deleted {id}");
            } else {
                return Err("delete did not commit".into());
            }
        }
    }

    Ok(())
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn activity_table(activities: &[Activity]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["id", "title", "date", "category", "city", "venue"]);
    for a in activities {
        table.add_row([
            a.id.as_str(),
            a.title.as_str(),
            a.date.as_str(),
            a.category.as_str(),
            a.city.as_str(),
            a.venue.as_str(),
        ]);
    }
    table
}

fn print_activity(activity: &Activity) {
    println!("id:          {}", activity.id);
    println!("title:       {}", activity.title);
    println!("date:        {}", activity.date);
    println!("category:    {}", activity.category);
    println!("city:        {}", activity.city);
    println!("venue:       {}", activity.venue);
    println!("description: {}", activity.description);
}
