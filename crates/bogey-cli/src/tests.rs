use std::path::PathBuf;

use bogey_core::config::StatsConfig;
use bogey_core::models::{Hole, HoleInput, OwnerId, ProblemCategory, Round, RoundId};
use bogey_core::services::GolfService;
use clap::Parser;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::cli::{Cli, Commands, HoleCommands, HoleEventFlags};
use crate::commands::common::{
    format_date, format_hole_line, format_relative_time, format_round_result,
    format_score_to_par, hole_problems, open_service, resolve_db_path, resolve_round_id,
    round_to_list_item, Session,
};
use crate::commands::hole::{events_from_flags, run_save};
use crate::commands::round::{run_delete, run_purge};
use crate::error::CliError;

async fn session_for(name: &str) -> Session {
    let service = GolfService::open_in_memory().await.unwrap();
    Session::new(service, Some(OwnerId::new(name).unwrap()))
}

#[test]
fn format_score_to_par_signs() {
    assert_eq!(format_score_to_par(0), "E");
    assert_eq!(format_score_to_par(3), "+3");
    assert_eq!(format_score_to_par(-2), "-2");
}

#[test]
fn format_relative_time_units() {
    let now = 10_000_000_000;
    assert_eq!(format_relative_time(now - 30_000, now), "just now");
    assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
    assert_eq!(format_relative_time(now - 2 * 60 * 60_000, now), "2h ago");
    assert_eq!(format_relative_time(now - 3 * 24 * 60 * 60_000, now), "3d ago");
}

#[test]
fn format_date_returns_calendar_day() {
    assert_eq!(format_date(0), "1970-01-01");
}

#[test]
fn round_result_open_and_complete() {
    let mut round = Round::new(OwnerId::new("alice").unwrap(), "Muni");
    assert_eq!(format_round_result(&round), "in progress");

    round.is_complete = true;
    round.total_score = Some(85);
    round.total_par = Some(72);
    assert_eq!(format_round_result(&round), "85 (+13)");

    let item = round_to_list_item(&round);
    assert_eq!(item.score_to_par, Some(13));
    assert_eq!(item.relative_time, "just now");
}

#[test]
fn hole_line_lists_problems_in_order() {
    let flags = HoleEventFlags {
        penalty: Some(Some("water".into())),
        three_putt: Some(None),
        ..HoleEventFlags::default()
    };
    let hole = Hole::from_input(
        RoundId::new(),
        HoleInput::new(5, 4, 7).with_events(events_from_flags(flags)),
    );

    assert_eq!(
        hole_problems(&hole),
        vec!["Double Bogeys+", "Three-Putts", "Penalties"]
    );
    assert!(format_hole_line(&hole).ends_with("Double Bogeys+, Three-Putts, Penalties"));
}

#[test]
fn events_from_flags_maps_every_flag() {
    let flags = HoleEventFlags {
        out_of_position: Some(Some(" blocked by trees ".into())),
        failed_up_down: Some(None),
        double_cause: Some("  ".into()),
        three_putt: Some(Some(40)),
        penalty: Some(None),
        penalty_reason: Some("ego".into()),
        wedge_shots: Some(4),
        wedge_reason: Some("chunked".into()),
        hero_shot_avoided: Some(Some("punched out".into())),
    };

    let events = events_from_flags(flags);
    let out_of_position = events.out_of_position.unwrap();
    assert!(out_of_position.occurred);
    assert_eq!(out_of_position.reason.as_deref(), Some("blocked by trees"));
    assert_eq!(events.failed_easy_up_down.unwrap().reason, None);
    assert_eq!(events.double_bogey_cause, None);
    assert_eq!(events.three_putt.unwrap().first_putt_distance, Some(40));
    let penalty = events.penalty.unwrap();
    assert_eq!(penalty.kind, None);
    assert_eq!(penalty.reason.as_deref(), Some("ego"));
    let wedge = events.wedge_range.unwrap();
    assert!(wedge.missed_target());
    assert_eq!(
        events.hero_shots_avoided.unwrap().description.as_deref(),
        Some("punched out")
    );
}

#[test]
fn events_from_empty_flags_records_nothing() {
    let events = events_from_flags(HoleEventFlags::default());
    assert_eq!(events, bogey_core::models::HoleEvents::default());
}

#[test]
fn cli_parses_hole_save_flags() {
    let cli = Cli::try_parse_from([
        "bogey",
        "--golfer",
        "alice",
        "hole",
        "save",
        "0192",
        "7",
        "--par",
        "3",
        "--strokes",
        "5",
        "--three-putt",
        "--penalty",
        "OB",
    ])
    .unwrap();

    assert_eq!(cli.golfer.as_deref(), Some("alice"));
    let Commands::Hole {
        command:
            HoleCommands::Save {
                round,
                number,
                par,
                strokes,
                events,
            },
    } = cli.command
    else {
        panic!("expected hole save");
    };
    assert_eq!(round, "0192");
    assert_eq!((number, par, strokes), (7, 3, 5));
    assert_eq!(events.three_putt, Some(None));
    assert_eq!(events.penalty, Some(Some("OB".to_string())));
    assert_eq!(events.out_of_position, None);
}

#[test]
fn cli_rejects_penalty_reason_without_penalty() {
    let parsed = Cli::try_parse_from([
        "bogey",
        "hole",
        "save",
        "0192",
        "7",
        "--par",
        "3",
        "--strokes",
        "5",
        "--penalty-reason",
        "ego",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn resolve_db_path_prefers_flag() {
    let explicit = PathBuf::from("/tmp/bogey-explicit.db");
    assert_eq!(resolve_db_path(Some(explicit.clone())).unwrap(), explicit);
}

#[tokio::test(flavor = "multi_thread")]
async fn resolve_round_id_by_prefix() {
    let session = session_for("alice").await;
    let golfer = session.golfer().unwrap().clone();
    let round = session
        .service
        .create_round(Some(&golfer), "Muni")
        .await
        .unwrap();
    let id = round.id.to_string();

    assert_eq!(resolve_round_id(&session, &id).await.unwrap(), round.id);
    assert_eq!(resolve_round_id(&session, &id[..13]).await.unwrap(), round.id);
    assert!(matches!(
        resolve_round_id(&session, "   ").await,
        Err(CliError::EmptyRoundId)
    ));
    assert!(matches!(
        resolve_round_id(&session, "ffffffff-f").await,
        Err(CliError::RoundNotFound(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn commands_require_a_golfer() {
    let service = GolfService::open_in_memory().await.unwrap();
    let session = Session::new(service, None);

    let error = run_save("0192", HoleInput::new(1, 4, 4), &session)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::MissingGolfer));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_validates_before_resolving_round() {
    let session = session_for("alice").await;

    let error = run_save("missing", HoleInput::new(19, 4, 4), &session)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Core(bogey_core::Error::Validation(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn save_then_delete_round() {
    let session = session_for("alice").await;
    let golfer = session.golfer().unwrap().clone();
    let round = session
        .service
        .create_round(Some(&golfer), "Muni")
        .await
        .unwrap();
    let prefix = round.id.to_string()[..13].to_string();

    run_save(&prefix, HoleInput::new(1, 4, 6), &session).await.unwrap();
    let holes = session
        .service
        .get_holes_for_round(Some(&golfer), &round.id)
        .await
        .unwrap();
    assert_eq!(holes.len(), 1);
    assert!(holes[0].double_bogey_or_worse.occurred);
    assert!(ProblemCategory::DoubleBogeyOrWorse.occurred_on(&holes[0]));

    run_delete(&prefix, &session).await.unwrap();
    assert_eq!(
        session.service.get_round(Some(&golfer), &round.id).await.unwrap(),
        None
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn purge_requires_confirmation() {
    let session = session_for("alice").await;
    let golfer = session.golfer().unwrap().clone();
    session
        .service
        .create_round(Some(&golfer), "Muni")
        .await
        .unwrap();

    assert!(matches!(
        run_purge(false, &session).await,
        Err(CliError::PurgeNotConfirmed)
    ));
    assert_eq!(session.service.get_rounds(Some(&golfer), None).await.unwrap().len(), 1);

    run_purge(true, &session).await.unwrap();
    assert!(session
        .service
        .get_rounds(Some(&golfer), None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn open_service_applies_stats_config() {
    let tmp = tempdir().unwrap();
    let stats = StatsConfig {
        problem_window: 4,
        ..StatsConfig::default()
    };

    let service = open_service(&tmp.path().join("data").join("bogey.db"), stats)
        .await
        .unwrap();
    assert_eq!(service.config().problem_window, 4);
}
