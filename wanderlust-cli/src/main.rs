mod file_storage;
mod loader;
mod report;
mod util;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use file_storage::FilePlanStorage;
use loader::CliLoader;
use report::OutputFormat;
use util::{entropy_seed, parse_emotions};
use wanderlust_core::{
    CatalogError, CatalogLoader, DesiredChange, GroupSize, Notice, PlanStatus, Region,
    TravelEngine, UserProfile, score_and_rank, search_places,
};

/// Exit code for lookups that match nothing.
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "wanderlust", version = "0.1.0")]
#[command(about = "Mood-based destination suggestions and trip-plan tracking for South India")]
struct Args {
    /// JSON file holding the saved trip plans
    #[arg(long, global = true, default_value = "wanderlust-plans.json")]
    plans_file: PathBuf,

    /// Replace the bundled destination catalog with a JSON file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override scoring bonuses and sampling sizes with a JSON file
    #[arg(long, global = true)]
    scoring_config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Optional path to write output (defaults to stdout)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest two or three destinations for how you feel
    Recommend {
        /// Current emotions (comma-separated: stressed, peaceful, excited, anxious, tired, curious, happy, lonely)
        #[arg(short, long)]
        emotions: String,

        /// The change you want from the trip
        #[arg(short, long)]
        change: Option<DesiredChange>,

        /// Who is travelling
        #[arg(short, long)]
        group: Option<GroupSize>,

        /// Seed for reproducible picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show the full scored ranking instead of sampling
        #[arg(long)]
        ranked: bool,
    },
    /// List catalog destinations
    Catalog {
        /// Only destinations in this region
        #[arg(short, long)]
        region: Option<Region>,

        /// Count "Near Bangalore" entries as Karnataka when filtering
        #[arg(long)]
        primary: bool,
    },
    /// Show one destination in full
    Show {
        name: String,

        #[arg(short, long)]
        region: Region,
    },
    /// Search the simulated map for places
    Places {
        #[arg(default_value = "")]
        query: String,
    },
    /// Manage saved trip plans
    #[command(subcommand)]
    Plan(PlanCommand),
}

#[derive(Debug, Subcommand)]
enum PlanCommand {
    /// Add a catalog destination to your plans
    Add {
        name: String,

        #[arg(short, long)]
        region: Region,
    },
    /// Add a place found with `places`
    AddPlace { name: String },
    /// Remove a plan by id
    Remove { id: String },
    /// Move a plan to selected, ongoing or completed
    Status { id: String, status: PlanStatus },
    /// List plans, optionally filtered
    List {
        #[arg(long)]
        status: Option<PlanStatus>,

        #[arg(long)]
        region: Option<Region>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    NotFound,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.format == OutputFormat::Console && args.output.is_none() {
        announce_banner();
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let outcome = run(&args, &mut output_target)?;
    output_target.flush_inner()?;

    if outcome == Outcome::NotFound {
        std::process::exit(EXIT_NOT_FOUND);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner() {
    println!("{}", "🧭 Wanderlust".bright_cyan().bold());
    println!("{}", "=============".cyan());
}

fn engine_loader(args: &Args) -> CliLoader {
    CliLoader {
        catalog_file: args.catalog.clone(),
        scoring_file: args.scoring_config.clone(),
    }
}

fn engine(args: &Args) -> TravelEngine<CliLoader, FilePlanStorage> {
    TravelEngine::new(engine_loader(args), FilePlanStorage::new(&args.plans_file))
}

fn run(args: &Args, out: &mut dyn Write) -> Result<Outcome> {
    match &args.command {
        Command::Recommend {
            emotions,
            change,
            group,
            seed,
            ranked,
        } => {
            let profile = build_profile(emotions, *change, *group)?;
            if *ranked {
                print_ranking(args, &profile, out)?;
            } else {
                let seed = seed.unwrap_or_else(entropy_seed);
                log::info!("recommending with seed {seed}");
                let picks = engine(args).recommend(&profile, seed)?;
                report::write_destinations(
                    out,
                    args.format,
                    &format!("Suggested for you (seed {seed})"),
                    &picks,
                )?;
            }
            Ok(Outcome::Done)
        }
        Command::Catalog { region, primary } => {
            let catalog = engine_loader(args).load_catalog()?;
            let listed: Vec<_> = match (region, primary) {
                (Some(region), true) => catalog.by_primary_region(*region).cloned().collect(),
                (Some(region), false) => catalog.by_region(*region).cloned().collect(),
                (None, _) => catalog.iter().cloned().collect(),
            };
            let title = region.map_or_else(|| "All destinations".to_string(), |r| r.to_string());
            report::write_destinations(out, args.format, &title, &listed)?;
            Ok(Outcome::Done)
        }
        Command::Show { name, region } => {
            let engine = engine(args);
            let destination = match engine.destination(name, *region) {
                Ok(destination) => destination,
                Err(err) if is_not_found(&err) => {
                    eprintln!("{}", err.to_string().red());
                    return Ok(Outcome::NotFound);
                }
                Err(err) => return Err(err),
            };
            let plans = engine.open_plans();
            report::write_destination(
                out,
                args.format,
                &destination,
                plans.find_for(&destination.name, destination.region),
            )?;
            Ok(Outcome::Done)
        }
        Command::Places { query } => {
            report::write_places(out, args.format, &search_places(query))?;
            Ok(Outcome::Done)
        }
        Command::Plan(command) => run_plan(args, command, out),
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NotFound { .. })
    )
}

fn build_profile(
    emotions: &str,
    change: Option<DesiredChange>,
    group: Option<GroupSize>,
) -> Result<UserProfile> {
    let mut profile = UserProfile::new().with_emotions(parse_emotions(emotions)?);
    if !profile.is_ready() {
        bail!("at least one emotion is required");
    }
    if let Some(change) = change {
        profile = profile.with_desired_change(change);
    }
    if let Some(group) = group {
        profile = profile.with_group_size(group);
    }
    Ok(profile)
}

fn print_ranking(args: &Args, profile: &UserProfile, out: &mut dyn Write) -> Result<()> {
    let loader = engine_loader(args);
    let catalog = loader.load_catalog()?;
    let cfg = loader.load_scoring_config()?;
    let ranked = score_and_rank(catalog.as_slice(), profile, &cfg);
    report::write_ranked(out, args.format, &ranked, cfg.pool_size)
}

fn run_plan(args: &Args, command: &PlanCommand, out: &mut dyn Write) -> Result<Outcome> {
    let engine = engine(args);
    let mut plans = engine.open_plans();
    log::debug!(
        "{} plans loaded from {}",
        plans.len(),
        plans.storage().path().display()
    );

    match command {
        PlanCommand::Add { name, region } => {
            let destination = match engine.destination(name, *region) {
                Ok(destination) => destination,
                Err(err) if is_not_found(&err) => {
                    eprintln!("{}", err.to_string().red());
                    return Ok(Outcome::NotFound);
                }
                Err(err) => return Err(err),
            };
            let outcome = plans.add_plan(destination);
            report::write_notice(out, args.format, &outcome.notice(), Some(outcome.plan()))?;
        }
        PlanCommand::AddPlace { name } => {
            let Some(place) = search_places(name)
                .into_iter()
                .find(|place| place.name.eq_ignore_ascii_case(name.trim()))
            else {
                eprintln!("{}", format!("no place named {name:?}").red());
                return Ok(Outcome::NotFound);
            };
            let outcome = plans.add_plan(place.to_destination());
            report::write_notice(out, args.format, &outcome.notice(), Some(outcome.plan()))?;
        }
        PlanCommand::Remove { id } => {
            let Some(removed) = plans.remove_plan(id) else {
                eprintln!("{}", format!("no plan with id {id:?}").red());
                return Ok(Outcome::NotFound);
            };
            report::write_notice(out, args.format, &Notice::removed(&removed), None)?;
        }
        PlanCommand::Status { id, status } => {
            let Some(plan) = plans.update_plan_status(id, *status) else {
                eprintln!("{}", format!("no plan with id {id:?}").red());
                return Ok(Outcome::NotFound);
            };
            let notice = Notice::status_changed(plan, *status);
            report::write_notice(out, args.format, &notice, Some(plan))?;
        }
        PlanCommand::List { status, region } => {
            let listed: Vec<_> = plans
                .plans()
                .iter()
                .filter(|plan| status.is_none_or(|s| plan.status == s))
                .filter(|plan| region.is_none_or(|r| plan.region() == r))
                .collect();
            report::write_plans(out, args.format, &listed, plans.status_counts())?;
        }
    }
    Ok(Outcome::Done)
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::temp_path;
    use wanderlust_core::{Emotion, Plan, PlanStorage};

    fn base_args(command: Command) -> Args {
        Args {
            plans_file: temp_path("plans").join("plans.json"),
            catalog: None,
            scoring_config: None,
            format: OutputFormat::Json,
            output: None,
            verbose: false,
            command,
        }
    }

    fn run_to_string(args: &Args) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = run(args, &mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    fn saved_plans(args: &Args) -> Vec<Plan> {
        FilePlanStorage::new(&args.plans_file)
            .load()
            .unwrap()
            .unwrap_or_default()
    }

    #[test]
    fn args_parse_plan_subcommands() {
        let args = Args::try_parse_from([
            "wanderlust",
            "plan",
            "status",
            "ooty-1",
            "ongoing",
            "--plans-file",
            "trip.json",
        ])
        .unwrap();
        assert_eq!(args.plans_file, PathBuf::from("trip.json"));
        assert!(matches!(
            args.command,
            Command::Plan(PlanCommand::Status {
                status: PlanStatus::Ongoing,
                ..
            })
        ));
    }

    #[test]
    fn args_reject_unknown_region() {
        assert!(Args::try_parse_from(["wanderlust", "show", "Ooty", "--region", "Bangalore"]).is_err());
    }

    #[test]
    fn profile_requires_an_emotion() {
        assert!(build_profile(" , ", None, None).is_err());
        let profile =
            build_profile("stressed,tired", Some(DesiredChange::Peace), Some(GroupSize::Solo))
                .unwrap();
        assert!(profile.emotions.contains(&Emotion::Tired));
        assert_eq!(profile.group_size, Some(GroupSize::Solo));
    }

    #[test]
    fn output_target_file_receives_run_output() {
        let path = temp_path("output");
        let args = base_args(Command::Places {
            query: "falls".to_string(),
        });
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        run(&args, &mut target).unwrap();
        target.flush().unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("Jog Falls"));
    }

    #[test]
    fn seeded_recommend_is_repeatable() {
        let args = base_args(Command::Recommend {
            emotions: "excited".to_string(),
            change: Some(DesiredChange::Adventure),
            group: None,
            seed: Some(5),
            ranked: false,
        });
        let (_, first) = run_to_string(&args);
        let (_, second) = run_to_string(&args);
        assert_eq!(first, second);
        let picks: Vec<wanderlust_core::Destination> = serde_json::from_str(&first).unwrap();
        assert!((2..=3).contains(&picks.len()));
    }

    #[test]
    fn ranking_lists_every_destination() {
        let args = base_args(Command::Recommend {
            emotions: "stressed".to_string(),
            change: Some(DesiredChange::Peace),
            group: None,
            seed: None,
            ranked: true,
        });
        let (_, text) = run_to_string(&args);
        let rows: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(rows.len(), wanderlust_core::Catalog::bundled().len());
        assert_eq!(rows[0]["rank"], 1);
        assert_eq!(rows[0]["score"], 100);
    }

    #[test]
    fn plan_add_then_duplicate_keeps_one() {
        let add = base_args(Command::Plan(PlanCommand::Add {
            name: "Ooty".to_string(),
            region: Region::TamilNadu,
        }));
        let (_, first) = run_to_string(&add);
        assert!(first.contains("Added to your plan!"));
        let (_, second) = run_to_string(&add);
        assert!(second.contains("Already in your plan"));
        assert_eq!(saved_plans(&add).len(), 1);
    }

    #[test]
    fn plan_lifecycle_through_status_and_remove() {
        let mut args = base_args(Command::Plan(PlanCommand::Add {
            name: "Munnar".to_string(),
            region: Region::Kerala,
        }));
        run_to_string(&args);
        let id = saved_plans(&args)[0].id.clone();

        args.command = Command::Plan(PlanCommand::Status {
            id: id.clone(),
            status: PlanStatus::Completed,
        });
        let (outcome, _) = run_to_string(&args);
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(saved_plans(&args)[0].status, PlanStatus::Completed);

        args.command = Command::Plan(PlanCommand::List {
            status: Some(PlanStatus::Completed),
            region: None,
        });
        let (_, listed) = run_to_string(&args);
        let listed: Vec<Plan> = serde_json::from_str(&listed).unwrap();
        assert_eq!(listed.len(), 1);

        args.command = Command::Plan(PlanCommand::Remove { id: id.clone() });
        run_to_string(&args);
        assert!(saved_plans(&args).is_empty());

        args.command = Command::Plan(PlanCommand::Remove { id });
        let (outcome, _) = run_to_string(&args);
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn map_places_become_plans() {
        let args = base_args(Command::Plan(PlanCommand::AddPlace {
            name: "jog falls".to_string(),
        }));
        let (outcome, _) = run_to_string(&args);
        assert_eq!(outcome, Outcome::Done);
        let saved = saved_plans(&args);
        assert_eq!(saved[0].name(), "Jog Falls");
        assert_eq!(saved[0].destination.match_percentage, 80);
    }

    #[test]
    fn unknown_destination_is_not_found() {
        let args = base_args(Command::Show {
            name: "Atlantis".to_string(),
            region: Region::Kerala,
        });
        let (outcome, text) = run_to_string(&args);
        assert_eq!(outcome, Outcome::NotFound);
        assert!(text.is_empty());
    }

    #[test]
    fn catalog_primary_filter_folds_near_bangalore() {
        let mut args = base_args(Command::Catalog {
            region: Some(Region::Karnataka),
            primary: false,
        });
        let (_, strict) = run_to_string(&args);
        args.command = Command::Catalog {
            region: Some(Region::Karnataka),
            primary: true,
        };
        let (_, folded) = run_to_string(&args);
        let strict: Vec<serde_json::Value> = serde_json::from_str(&strict).unwrap();
        let folded: Vec<serde_json::Value> = serde_json::from_str(&folded).unwrap();
        assert_eq!(strict.len(), 4);
        assert_eq!(folded.len(), 7);
    }
}
