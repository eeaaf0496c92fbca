use bogey_core::stats::UserStatsSummary;

use crate::cli::StatsCommands;
use crate::commands::common::{format_round_lines, Session};
use crate::error::CliError;

pub async fn run_stats(command: StatsCommands, session: &Session) -> Result<(), CliError> {
    match command {
        StatsCommands::Summary { json } => run_summary(json, session).await,
        StatsCommands::Problem { json } => run_problem(json, session).await,
        StatsCommands::Recent { count, json } => run_recent(count, json, session).await,
    }
}

pub async fn run_summary(as_json: bool, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let summary = session
        .service
        .user_stats(Some(golfer))
        .await?
        .unwrap_or_else(UserStatsSummary::empty);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Rounds played: {}", summary.rounds_played);
    println!("Average score: {}", summary.average_score);
    println!();
    for (category, average) in &summary.stats {
        println!("{:<26}  {average:.1} / round", category.display_name());
    }
    Ok(())
}

pub async fn run_problem(as_json: bool, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let problem = session.service.biggest_problem(Some(golfer)).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&problem)?);
        return Ok(());
    }

    match problem {
        Some(problem) => {
            println!("Biggest problem: {}", problem.name);
            println!(
                "{:.1} per round, {} times over your last {} rounds",
                problem.avg_per_round, problem.total, problem.rounds_analyzed
            );
        }
        None => println!("No problems found yet. Finish a few rounds first."),
    }
    Ok(())
}

pub async fn run_recent(
    count: Option<usize>,
    as_json: bool,
    session: &Session,
) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let recent = session.service.recent_rounds(Some(golfer), count).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    for line in format_round_lines(&recent.rounds) {
        println!("{line}");
    }
    println!("Average score: {}", recent.average_score);
    Ok(())
}
