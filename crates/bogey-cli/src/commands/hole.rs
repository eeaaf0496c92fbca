use bogey_core::models::{
    HeroShotsAvoided, HoleEvents, HoleInput, Penalty, ReasonedEvent, ThreePutt, WedgeRange,
};
use bogey_core::util::normalize_text_option;

use crate::cli::{HoleCommands, HoleEventFlags};
use crate::commands::common::{format_hole_line, resolve_round_id, Session};
use crate::error::CliError;

pub async fn run_hole(command: HoleCommands, session: &Session) -> Result<(), CliError> {
    match command {
        HoleCommands::Save {
            round,
            number,
            par,
            strokes,
            events,
        } => {
            let input = HoleInput::new(number, par, strokes).with_events(events_from_flags(events));
            run_save(&round, input, session).await
        }
        HoleCommands::Show {
            round,
            number,
            json,
        } => run_show(&round, number, json, session).await,
    }
}

pub async fn run_save(round: &str, input: HoleInput, session: &Session) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    // Catch bad input before resolving the round
    input.validate()?;
    let round_id = resolve_round_id(session, round).await?;
    let hole = session
        .service
        .save_hole(Some(golfer), &round_id, input)
        .await?;

    println!("{}", format_hole_line(&hole));
    Ok(())
}

pub async fn run_show(
    round: &str,
    number: u8,
    as_json: bool,
    session: &Session,
) -> Result<(), CliError> {
    let golfer = session.golfer()?;
    let round_id = resolve_round_id(session, round).await?;
    let hole = session
        .service
        .get_hole(Some(golfer), &round_id, number)
        .await?
        .ok_or(CliError::HoleNotFound(number))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&hole)?);
    } else {
        println!("{}", format_hole_line(&hole));
    }
    Ok(())
}

/// Translate command-line flags into the events recorded on a hole
pub fn events_from_flags(flags: HoleEventFlags) -> HoleEvents {
    let reasoned = |reason: Option<String>| ReasonedEvent::new(normalize_text_option(reason));

    HoleEvents {
        out_of_position: flags.out_of_position.map(reasoned),
        failed_easy_up_down: flags.failed_up_down.map(reasoned),
        double_bogey_cause: normalize_text_option(flags.double_cause),
        three_putt: flags.three_putt.map(|first_putt_distance| ThreePutt {
            occurred: true,
            first_putt_distance,
        }),
        penalty: flags.penalty.map(|kind| Penalty {
            occurred: true,
            kind: normalize_text_option(kind),
            reason: normalize_text_option(flags.penalty_reason),
        }),
        wedge_range: flags.wedge_shots.map(|shots| WedgeRange {
            was_in_wedge_range: true,
            shots_from_wedge_range: Some(shots),
            reason: normalize_text_option(flags.wedge_reason),
        }),
        hero_shots_avoided: flags
            .hero_shot_avoided
            .map(|description| HeroShotsAvoided {
                occurred: true,
                description: normalize_text_option(description),
            }),
    }
}
