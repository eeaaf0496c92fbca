use serde_json::json;

use crate::cli::RoundCommands;
use crate::commands::common::{
    format_date, format_hole_line, format_round_lines, format_round_result, format_score_to_par,
    resolve_round_id, round_to_list_item, RoundListItem, Session,
};
use crate::error::CliError;

pub async fn run_round(command: RoundCommands, session: &Session) -> Result<(), CliError> {
    match command {
        RoundCommands::Start { course } => run_start(&course, session).await,
        RoundCommands::List { limit, json } => run_list(limit, json, session).await,
        RoundCommands::Show { id, json } => run_show(&id, json, session).await,
        RoundCommands::Finish { id } => run_finish(&id, session).await,
        RoundCommands::Delete { id } => run_delete(&id, session).await,
        RoundCommands::Purge { yes } => run_purge(yes, session).await,
    }
}

pub async fn run_start(course_parts: &[String], session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let round = session
        .service
        .create_round(Some(golfer), &course_parts.join(" "))
        .await?;

    println!("{}", round.id);
    Ok(())
}

pub async fn run_list(limit: Option<usize>, as_json: bool, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let rounds = session.service.get_rounds(Some(golfer), limit).await?;

    if as_json {
        let json_items = rounds
            .iter()
            .map(round_to_list_item)
            .collect::<Vec<RoundListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else if rounds.is_empty() {
        println!("No rounds yet. Start one with `bogey round start <course>`.");
    } else {
        for line in format_round_lines(&rounds) {
            println!("{line}");
        }
    }

    Ok(())
}

pub async fn run_show(id: &str, as_json: bool, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let round_id = resolve_round_id(session, id).await?;
    let Some(scorecard) = session.service.get_round(Some(golfer), &round_id).await? else {
        return Err(CliError::RoundNotFound(id.trim().to_string()));
    };
    let summary = session
        .service
        .round_summary(Some(golfer), &round_id)
        .await?
        .ok_or_else(|| CliError::RoundNotFound(id.trim().to_string()))?;

    if as_json {
        let rendered = json!({ "round": scorecard, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    println!(
        "{}  {}  {}",
        scorecard.round.course_name,
        format_date(scorecard.round.date),
        format_round_result(&scorecard.round)
    );
    println!("{}", scorecard.round.id);
    println!();
    for hole in &scorecard.holes {
        println!("{}", format_hole_line(hole));
    }
    println!();
    println!(
        "{} holes: {} on par {} ({})",
        summary.holes_played,
        summary.totals.total_score,
        summary.totals.total_par,
        format_score_to_par(summary.score_to_par)
    );
    if let Some(issue) = summary.main_issue {
        println!("Main issue: {issue}");
    }

    Ok(())
}

pub async fn run_finish(id: &str, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let round_id = resolve_round_id(session, id).await?;
    let round = session.service.finish_round(Some(golfer), &round_id).await?;

    println!(
        "{}: {}",
        round.course_name,
        format_round_result(&round)
    );
    Ok(())
}

pub async fn run_delete(id: &str, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let round_id = resolve_round_id(session, id).await?;
    session.service.delete_round(Some(golfer), &round_id).await?;

    println!("{round_id}");
    Ok(())
}

pub async fn run_purge(confirmed: bool, session: &Session) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::PurgeNotConfirmed);
    }

    let golfer = session.golfer()?;
    let deleted = session.service.delete_all_rounds(Some(golfer)).await?;
    println!("Deleted {deleted} rounds");
    Ok(())
}
