//! Fixtures for service tests.

use rusqlite::params;

use super::GolfService;
use crate::models::{HoleEvents, HoleInput, OwnerId, RoundId};

pub fn golfer(name: &str) -> OwnerId {
    OwnerId::new(name).unwrap()
}

pub async fn service() -> GolfService {
    GolfService::open_in_memory().await.unwrap()
}

/// Par-4 holes numbered from 1 with the given strokes.
pub fn par_fours(strokes: &[u32]) -> Vec<HoleInput> {
    strokes
        .iter()
        .zip(1u8..)
        .map(|(&strokes, number)| HoleInput::new(number, 4, strokes))
        .collect()
}

/// A single par-4 hole carrying `events`.
pub fn hole_with(number: u8, events: HoleEvents) -> HoleInput {
    HoleInput::new(number, 4, 4).with_events(events)
}

/// Push a round's play date `minutes` into the past.
pub async fn backdate(service: &GolfService, round_id: &RoundId, minutes: i64) {
    let db = service.db.lock().await;
    db.connection()
        .execute(
            "UPDATE rounds SET date = date - ? WHERE id = ?",
            params![minutes * 60_000, round_id.as_str()],
        )
        .unwrap();
}

/// Log `holes`, finish the round, and date it `minutes_ago`.
pub async fn played_round(
    service: &GolfService,
    owner: &OwnerId,
    minutes_ago: i64,
    holes: Vec<HoleInput>,
) -> RoundId {
    let round = service.create_round(Some(owner), "Muni").await.unwrap();
    for input in holes {
        service.save_hole(Some(owner), &round.id, input).await.unwrap();
    }
    service.finish_round(Some(owner), &round.id).await.unwrap();
    backdate(service, &round.id, minutes_ago).await;
    round.id
}
