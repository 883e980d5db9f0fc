use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::io::Write;

use wanderlust_core::{
    Destination, Notice, PlaceResult, Plan, PlanStatus, ScoredDestination, StatusCounts,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn heading(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bright_cyan().bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count()).cyan())?;
    Ok(())
}

fn destination_line(out: &mut dyn Write, destination: &Destination) -> Result<()> {
    writeln!(
        out,
        "{} ({}) {}% {}",
        destination.name.bold(),
        destination.region,
        destination.match_percentage.to_string().green(),
        destination.emotional_match.italic()
    )?;
    writeln!(
        out,
        "   Safety: {}  Price: {}",
        destination.safety_level.label(),
        destination.price_range.symbol()
    )?;
    Ok(())
}

pub fn write_destinations(
    out: &mut dyn Write,
    format: OutputFormat,
    title: &str,
    destinations: &[Destination],
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, destinations);
    }
    heading(out, title)?;
    if destinations.is_empty() {
        writeln!(out, "{}", "No destinations.".yellow())?;
    }
    for destination in destinations {
        destination_line(out, destination)?;
    }
    Ok(())
}

pub fn write_ranked(
    out: &mut dyn Write,
    format: OutputFormat,
    ranked: &[ScoredDestination<'_>],
    pool_size: usize,
) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<_> = ranked
            .iter()
            .enumerate()
            .map(|(rank, scored)| {
                json!({
                    "rank": rank + 1,
                    "score": scored.score,
                    "inPool": rank < pool_size,
                    "destination": scored.destination,
                })
            })
            .collect();
        return write_json(out, &rows);
    }
    heading(out, "Ranked destinations")?;
    for (rank, scored) in ranked.iter().enumerate() {
        let marker = if rank < pool_size { "*" } else { " " };
        writeln!(
            out,
            "{marker} {:>2}. {:>3}  {} ({})",
            rank + 1,
            scored.score.to_string().green(),
            scored.destination.name.bold(),
            scored.destination.region
        )?;
    }
    Ok(())
}

pub fn write_destination(
    out: &mut dyn Write,
    format: OutputFormat,
    destination: &Destination,
    planned: Option<&Plan>,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &json!({
                "destination": destination,
                "plan": planned,
            }),
        );
    }
    heading(out, &destination.name)?;
    destination_line(out, destination)?;
    if let Some(group) = destination.ideal_group_size {
        writeln!(out, "   Ideal for: {}", group.label())?;
    }
    if let Some(best_time) = &destination.best_time {
        writeln!(out, "   Best time: {best_time}")?;
    }
    if !destination.description.is_empty() {
        writeln!(out, "   {}", destination.description)?;
    }
    for (label, items) in [
        ("Highlights", &destination.highlights),
        ("Activities", &destination.activities),
        ("Tips", &destination.tips),
    ] {
        if !items.is_empty() {
            writeln!(out, "   {label}:")?;
            for item in items {
                writeln!(out, "     • {item}")?;
            }
        }
    }
    match planned {
        Some(plan) => writeln!(
            out,
            "   {} {} [{}]",
            "In your plan:".green(),
            plan.id,
            plan.status
        )?,
        None => writeln!(out, "   {}", "Not in your plan yet.".dimmed())?,
    }
    Ok(())
}

fn status_colored(status: PlanStatus) -> colored::ColoredString {
    match status {
        PlanStatus::Selected => status.label().blue(),
        PlanStatus::Ongoing => status.label().yellow(),
        PlanStatus::Completed => status.label().green(),
    }
}

pub fn write_plans(
    out: &mut dyn Write,
    format: OutputFormat,
    plans: &[&Plan],
    counts: StatusCounts,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, plans);
    }
    heading(out, "Your trip plans")?;
    writeln!(
        out,
        "Total: {}  Selected: {}  Ongoing: {}  Completed: {}",
        counts.total(),
        counts.selected,
        counts.ongoing,
        counts.completed
    )?;
    writeln!(out)?;
    if plans.is_empty() {
        writeln!(out, "{}", "No plans match.".yellow())?;
    }
    for plan in plans {
        writeln!(
            out,
            "[{}] {} ({})",
            status_colored(plan.status),
            plan.name().bold(),
            plan.region()
        )?;
        writeln!(out, "   id: {}  added: {}", plan.id, plan.date_added)?;
    }
    Ok(())
}

pub fn write_places(out: &mut dyn Write, format: OutputFormat, places: &[PlaceResult]) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, places);
    }
    heading(out, "Places nearby")?;
    if places.is_empty() {
        writeln!(out, "{}", "No places found.".yellow())?;
    }
    for place in places {
        writeln!(
            out,
            "{} - {} ({}) {:.1}",
            place.name.bold(),
            place.category,
            place.area,
            place.rating
        )?;
    }
    Ok(())
}

pub fn write_notice(
    out: &mut dyn Write,
    format: OutputFormat,
    notice: &Notice,
    plan: Option<&Plan>,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &json!({
                "notice": notice,
                "plan": plan,
            }),
        );
    }
    writeln!(out, "{}", notice.title.bright_green().bold())?;
    writeln!(out, "{}", notice.description)?;
    if let Some(plan) = plan {
        writeln!(out, "id: {}", plan.id)?;
    }
    Ok(())
}
