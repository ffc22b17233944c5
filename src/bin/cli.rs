//! RosterDB CLI
//!
//! Thin presentation layer over the record store: each subcommand loads the
//! data file, performs exactly one core operation, prints the result, and
//! saves after a successful mutation.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use rosterdb::stats;
use rosterdb::{Config, FieldUpdate, Player, PlayerCodec, Result, Roster, RosterError};

/// RosterDB CLI
#[derive(Parser, Debug)]
#[command(name = "rosterdb-cli")]
#[command(about = "Record manager for sports rosters")]
#[command(version)]
struct Args {
    /// Path of the binary data file
    #[arg(short, long, default_value = "./players.dat")]
    data_file: String,

    /// Warn about loaded records that fail validation
    #[arg(long)]
    validate_on_load: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new player
    Add {
        /// Unique 12-character id
        id: String,
        name: String,
        team: String,
        /// One of PG, SG, SF, PF, C
        position: String,
        /// Height in cm (100-250)
        height: i32,
        /// Weight in kg (40-200)
        weight: i32,
        /// Jersey number (0-99)
        jersey: i32,
    },

    /// Look up a player by id
    Get { id: String },

    /// Look up the most recently added player with a name
    Find { name: String },

    /// Change one field of a player
    Set {
        id: String,
        /// Field to change: name, team, position, height, weight, jersey
        field: String,
        value: String,
    },

    /// Delete a player by id
    Del { id: String },

    /// List every player, most recent first
    List,

    /// League-wide summary
    League,

    /// Summary for one team
    Team { name: String },

    /// Most efficient player
    Mvp,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rosterdb=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .data_file(&args.data_file)
        .validate_on_load(args.validate_on_load)
        .build();
    let codec = PlayerCodec::new(config);

    let mut roster = Roster::new();
    codec.load(&mut roster)?;

    match args.command {
        Commands::Add {
            id,
            name,
            team,
            position,
            height,
            weight,
            jersey,
        } => {
            let added = roster.insert(Player {
                id,
                name,
                team,
                position,
                height,
                weight,
                jersey,
            })?;
            println!("added: {}", added);
            codec.save(&roster)?;
        }

        Commands::Get { id } => match roster.find_by_id(&id) {
            Some(player) => println!("{}", player),
            None => println!("no record with id {}", id),
        },

        Commands::Find { name } => match roster.find_by_name(&name) {
            Some(player) => println!("{}", player),
            None => println!("no record with name {}", name),
        },

        Commands::Set { id, field, value } => {
            let change = parse_field_update(&field, &value)?;
            roster.update(&id, change)?;
            println!("updated {}", id);
            codec.save(&roster)?;
        }

        Commands::Del { id } => {
            roster.delete_by_id(&id)?;
            println!("deleted {}", id);
            codec.save(&roster)?;
        }

        Commands::List => {
            if roster.is_empty() {
                println!("no players");
            }
            for player in roster.all() {
                println!("{}", player);
            }
        }

        Commands::League => match stats::league_summary(&roster) {
            Some(summary) => print_league(&summary),
            None => println!("no player data"),
        },

        Commands::Team { name } => match stats::team_summary(&roster, &name) {
            Some(summary) => {
                println!("team {} ({} players)", name, summary.count);
                println!("  avg height:     {:.1} cm", summary.avg_height);
                println!("  avg weight:     {:.1} kg", summary.avg_weight);
                println!("  avg efficiency: {:.1}", summary.avg_efficiency);
            }
            None => println!("no players on team {}", name),
        },

        Commands::Mvp => match stats::most_efficient(&roster) {
            Some(player) => {
                println!("{} (efficiency {:.1})", player, stats::efficiency(player))
            }
            None => println!("no player data"),
        },
    }

    Ok(())
}

fn parse_field_update(field: &str, value: &str) -> Result<FieldUpdate> {
    let parse_int = |field: &str| {
        value.parse::<i32>().map_err(|_| {
            RosterError::InvalidData(format!("{} expects an integer, got {:?}", field, value))
        })
    };

    match field {
        "name" => Ok(FieldUpdate::Name(value.to_string())),
        "team" => Ok(FieldUpdate::Team(value.to_string())),
        "position" => Ok(FieldUpdate::Position(value.to_string())),
        "height" => Ok(FieldUpdate::Height(parse_int("height")?)),
        "weight" => Ok(FieldUpdate::Weight(parse_int("weight")?)),
        "jersey" => Ok(FieldUpdate::Jersey(parse_int("jersey")?)),
        other => Err(RosterError::InvalidData(format!(
            "unknown field {:?}; expected name, team, position, height, weight or jersey",
            other
        ))),
    }
}

fn print_league(summary: &stats::LeagueSummary) {
    println!("league summary ({} players)", summary.count);
    println!("  avg height: {:.1} cm", summary.avg_height);
    println!(
        "  tallest:    {} ({} cm)",
        summary.tallest.name, summary.tallest.height
    );
    println!(
        "  shortest:   {} ({} cm)",
        summary.shortest.name, summary.shortest.height
    );
    println!("  avg weight: {:.1} kg", summary.avg_weight);
    println!(
        "  heaviest:   {} ({} kg)",
        summary.heaviest.name, summary.heaviest.weight
    );
    println!(
        "  lightest:   {} ({} kg)",
        summary.lightest.name, summary.lightest.weight
    );
    println!("  positions:");
    for share in &summary.position_breakdown {
        println!(
            "    {:<2} {:>3} ({:.1}%)",
            share.position, share.count, share.percent
        );
    }
}
