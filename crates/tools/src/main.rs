use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use directory::seed::seed_stakeholders;
use directory::{
    Stakeholder, StakeholderKind, StakeholderQuery, filter_stakeholders, find_by_id,
    resolve_connections,
};
use globe::markers::{MARKER_RADIUS, extract_markers};
use globe::session::GlobeSession;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Stakeholder globe data tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a seeded stakeholder dataset
    Seed {
        /// Number of records to generate
        #[arg(long, default_value_t = 50)]
        count: usize,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Filter and search a stakeholder dataset
    Query {
        /// JSON file holding an array of stakeholder records
        file: PathBuf,

        /// Keep only records of this kind
        #[arg(long)]
        kind: Option<StakeholderKind>,

        /// Case-insensitive search over name/organization/region/interests
        #[arg(long)]
        search: Option<String>,
    },

    /// Project stakeholders onto the display sphere
    Project {
        /// JSON file holding an array of stakeholder records
        file: PathBuf,

        /// Globe spin in degrees
        #[arg(long, default_value_t = 0.0)]
        rotation: f64,

        /// Sphere radius
        #[arg(long, default_value_t = MARKER_RADIUS)]
        radius: f64,
    },

    /// Resolve a stakeholder's connections
    Connections {
        /// JSON file holding an array of stakeholder records
        file: PathBuf,

        /// Id of the record whose connections to resolve
        id: String,
    },
}

#[derive(Debug, Serialize)]
struct MarkerRow {
    id: String,
    x: f64,
    y: f64,
    z: f64,
    visible: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let args = Args::parse();
    match args.command {
        Command::Seed { count, out } => cmd_seed(count, out),
        Command::Query { file, kind, search } => cmd_query(&file, kind, search),
        Command::Project {
            file,
            rotation,
            radius,
        } => cmd_project(&file, rotation, radius),
        Command::Connections { file, id } => cmd_connections(&file, &id),
    }
}

fn cmd_seed(count: usize, out: Option<PathBuf>) -> Result<(), String> {
    let stakeholders = seed_stakeholders(count);
    info!("seeded {} stakeholder records", stakeholders.len());

    let payload =
        serde_json::to_string_pretty(&stakeholders).map_err(|e| format!("json: {e}"))?;
    match out {
        Some(path) => {
            fs::write(&path, payload).map_err(|e| format!("write {path:?}: {e}"))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{payload}"),
    }
    Ok(())
}

fn cmd_query(
    file: &Path,
    kind: Option<StakeholderKind>,
    search: Option<String>,
) -> Result<(), String> {
    let stakeholders = load_stakeholders(file)?;
    let query = StakeholderQuery { kind, search };
    let matches = filter_stakeholders(&stakeholders, &query);
    info!("{} of {} records match", matches.len(), stakeholders.len());

    println!(
        "{}",
        serde_json::to_string_pretty(&matches).map_err(|e| format!("json: {e}"))?
    );
    Ok(())
}

fn cmd_project(file: &Path, rotation: f64, radius: f64) -> Result<(), String> {
    let stakeholders = load_stakeholders(file)?;

    let mut session = GlobeSession::new();
    session.set_stakeholders(stakeholders);
    session.spin.rotation_deg = rotation;

    let snapshot = extract_markers(&session, radius);
    let visible = snapshot.visible().count();
    info!(
        "projected {} markers at rotation {rotation}° ({visible} visible)",
        snapshot.markers.len()
    );

    let rows: Vec<MarkerRow> = snapshot
        .markers
        .iter()
        .map(|m| MarkerRow {
            id: m.id.clone(),
            x: m.position.x,
            y: m.position.y,
            z: m.position.z,
            visible: m.visible,
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&rows).map_err(|e| format!("json: {e}"))?
    );
    Ok(())
}

fn cmd_connections(file: &Path, id: &str) -> Result<(), String> {
    let stakeholders = load_stakeholders(file)?;
    let stakeholder =
        find_by_id(&stakeholders, id).ok_or_else(|| format!("no stakeholder with id {id}"))?;

    let connected = resolve_connections(stakeholder, &stakeholders);
    info!(
        "{} of {} connection ids resolve",
        connected.len(),
        stakeholder.connections.len()
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&connected).map_err(|e| format!("json: {e}"))?
    );
    Ok(())
}

fn load_stakeholders(path: &Path) -> Result<Vec<Stakeholder>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("parse {path:?}: {e}"))
}
