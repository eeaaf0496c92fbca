use std::env;
use std::path::{Path, PathBuf};

use bogey_core::config::StatsConfig;
use bogey_core::models::{Hole, ProblemCategory, Round, RoundId};
use bogey_core::services::GolfService;
use bogey_core::OwnerId;
use chrono::Utc;
use serde::Serialize;

use crate::error::CliError;

pub const DB_PATH_ENV: &str = "BOGEY_DB_PATH";

/// An open database plus the golfer the command acts for
pub struct Session {
    pub service: GolfService,
    golfer: Option<OwnerId>,
}

impl Session {
    pub const fn new(service: GolfService, golfer: Option<OwnerId>) -> Self {
        Self { service, golfer }
    }

    pub fn golfer(&self) -> Result<&OwnerId, CliError> {
        self.golfer.as_ref().ok_or(CliError::MissingGolfer)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundListItem {
    pub id: String,
    pub course_name: String,
    pub date: i64,
    pub relative_time: String,
    pub is_complete: bool,
    pub total_score: Option<u32>,
    pub total_par: Option<u32>,
    pub score_to_par: Option<i64>,
}

pub fn round_to_list_item(round: &Round) -> RoundListItem {
    let now_ms = Utc::now().timestamp_millis();
    RoundListItem {
        id: round.id.to_string(),
        course_name: round.course_name.clone(),
        date: round.date,
        relative_time: format_relative_time(round.date, now_ms),
        is_complete: round.is_complete,
        total_score: round.total_score,
        total_par: round.total_par,
        score_to_par: round.score_to_par(),
    }
}

pub fn short_id(id: &RoundId) -> String {
    id.to_string().chars().take(13).collect()
}

pub fn format_round_lines(rounds: &[Round]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    rounds
        .iter()
        .map(|round| {
            let course = truncate(&round.course_name, 28);
            let relative_time = format_relative_time(round.date, now_ms);
            format!(
                "{:<13}  {course:<28}  {relative_time:<10}  {}",
                short_id(&round.id),
                format_round_result(round)
            )
        })
        .collect()
}

/// `"85 (+13)"` for completed rounds, `"in progress"` otherwise
pub fn format_round_result(round: &Round) -> String {
    match (round.total_score, round.score_to_par()) {
        (Some(score), Some(to_par)) if round.is_complete => {
            format!("{score} ({})", format_score_to_par(to_par))
        }
        _ => "in progress".to_string(),
    }
}

pub fn format_score_to_par(to_par: i64) -> String {
    match to_par {
        0 => "E".to_string(),
        to_par if to_par > 0 => format!("+{to_par}"),
        to_par => to_par.to_string(),
    }
}

pub fn format_hole_line(hole: &Hole) -> String {
    let problems = hole_problems(hole);
    let line = format!(
        "{:>2}  par {}  {:>2}  {:>3}",
        hole.hole_number,
        hole.par,
        hole.strokes,
        format_score_to_par(hole.score_to_par())
    );

    if problems.is_empty() {
        line
    } else {
        format!("{line}  {}", problems.join(", "))
    }
}

/// Display names of the problems that occurred on the hole
pub fn hole_problems(hole: &Hole) -> Vec<&'static str> {
    ProblemCategory::ALL
        .into_iter()
        .filter(|category| category.occurred_on(hole))
        .map(ProblemCategory::display_name)
        .collect()
}

pub fn format_date(timestamp_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
        || timestamp_ms.to_string(),
        |date_time| date_time.format("%Y-%m-%d").to_string(),
    )
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated = value
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

pub fn normalize_round_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyRoundId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Resolve a full round ID or a unique prefix of one
pub async fn resolve_round_id(session: &Session, query: &str) -> Result<RoundId, CliError> {
    let query = normalize_round_identifier(query)?;
    if let Ok(round_id) = query.parse::<RoundId>() {
        return Ok(round_id);
    }

    let golfer = session.golfer()?;
    let matching_ids = session
        .service
        .list_round_ids_by_prefix(Some(golfer), &query, 3)
        .await?;

    match matching_ids.as_slice() {
        [] => Err(CliError::RoundNotFound(query)),
        [only] => only
            .parse::<RoundId>()
            .map_err(|_| CliError::RoundNotFound(query.clone())),
        _ => {
            let options = matching_ids
                .iter()
                .map(|id| id.chars().take(13).collect::<String>())
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousRoundId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match cli_db_path.or_else(|| env::var_os(DB_PATH_ENV).map(PathBuf::from)) {
        Some(path) => Ok(path),
        None => default_db_path(),
    }
}

pub fn default_db_path() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join("bogey").join("bogey.db"))
        .ok_or_else(|| CliError::Config("Failed to resolve CLI data directory".to_string()))
}

pub async fn open_service(path: &Path, stats: StatsConfig) -> Result<GolfService, CliError> {
    let service = GolfService::open_path(path.to_path_buf()).await?;
    Ok(service.with_config(stats))
}
