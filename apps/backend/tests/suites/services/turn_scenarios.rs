// Turn order through real plays: reverse, skip, wins and legality checks.

use std::sync::Arc;

use uno_backend::domain::{Direction, GameStatus};
use uno_backend::errors::domain::ValidationKind;
use uno_backend::services::players::PlayerService;

use crate::support::card_helpers::{card, give};
use crate::support::game_setup::started_table;

#[test]
fn reverse_from_first_seat_passes_turn_to_last_seat() {
    let t = started_table(&["ana", "bo", "cy"]);
    let (ana, bo, cy) = (t.id("ana"), t.id("bo"), t.id("cy"));
    give(&t.stores, t.game_id, ana, &["red 3", "red reverse", "blue 9"]);
    give(&t.stores, t.game_id, bo, &["red 4"]);
    give(&t.stores, t.game_id, cy, &["red 6"]);

    // Free opening play lands the turn on the owner
    let opening = t.flow.play_card(t.game_id, ana, card("red 3")).unwrap();
    assert_eq!(opening.next_player, "ana");

    let outcome = t
        .flow
        .play_card(t.game_id, ana, card("red reverse"))
        .unwrap();
    assert_eq!(outcome.next_player, "cy");
    assert_eq!(t.flow.current_turn(t.game_id).unwrap().as_deref(), Some("cy"));

    let snapshot = t.flow.snapshot(t.game_id).unwrap();
    assert_eq!(snapshot.direction, Direction::Reversed);
}

#[test]
fn opening_play_after_a_draw_still_hands_turn_to_owner() {
    let t = started_table(&["ana", "bo", "cy"]);
    let cy = t.id("cy");
    give(&t.stores, t.game_id, cy, &["red 3", "red 8"]);

    let drew = t.flow.buy_card(t.game_id, t.id("ana"), 1).unwrap();
    assert_eq!(drew.next_player, "bo");

    // No discard top yet, so cy's play is free and the owner acts next
    let opening = t.flow.play_card(t.game_id, cy, card("red 3")).unwrap();
    assert_eq!(opening.next_player, "ana");
    assert_eq!(t.flow.current_turn(t.game_id).unwrap().as_deref(), Some("ana"));

    let err = t.flow.play_card(t.game_id, cy, card("red 8")).unwrap_err();
    assert!(err.is(ValidationKind::NotYourTurn), "got {err:?}");
}

#[test]
fn skip_jumps_over_next_seat() {
    let t = started_table(&["ana", "bo", "cy"]);
    let (ana, bo, cy) = (t.id("ana"), t.id("bo"), t.id("cy"));
    give(&t.stores, t.game_id, ana, &["red 3", "red 4", "green 8"]);
    give(&t.stores, t.game_id, bo, &["red skip", "yellow 1"]);
    give(&t.stores, t.game_id, cy, &["red 6"]);

    t.flow.play_card(t.game_id, ana, card("red 3")).unwrap();
    let to_bo = t.flow.play_card(t.game_id, ana, card("red 4")).unwrap();
    assert_eq!(to_bo.next_player, "bo");

    let outcome = t.flow.play_card(t.game_id, bo, card("red skip")).unwrap();
    assert_eq!(outcome.next_player, "ana");

    let err = t.flow.play_card(t.game_id, cy, card("red 6")).unwrap_err();
    assert!(err.is(ValidationKind::NotYourTurn), "got {err:?}");
}

#[test]
fn reverse_then_skip_compose() {
    let t = started_table(&["ana", "bo", "cy", "di"]);
    let (ana, di) = (t.id("ana"), t.id("di"));
    give(&t.stores, t.game_id, ana, &["blue 1", "blue reverse", "blue 2"]);
    give(&t.stores, t.game_id, di, &["blue skip", "red 0"]);

    t.flow.play_card(t.game_id, ana, card("blue 1")).unwrap();
    let reversed = t.flow.play_card(t.game_id, ana, card("blue reverse")).unwrap();
    assert_eq!(reversed.next_player, "di");

    // Reversed order from di is cy, bo; skip lands on bo
    let skipped = t.flow.play_card(t.game_id, di, card("blue skip")).unwrap();
    assert_eq!(skipped.next_player, "bo");
}

#[test]
fn emptying_hand_wins_and_closes_the_game() {
    let t = started_table(&["ana", "bo"]);
    let (ana, bo) = (t.id("ana"), t.id("bo"));
    give(&t.stores, t.game_id, ana, &["red 3", "red 4"]);
    give(&t.stores, t.game_id, bo, &["red 5", "blue 1"]);

    t.flow.play_card(t.game_id, ana, card("red 3")).unwrap();
    let last = t.flow.play_card(t.game_id, ana, card("red 4")).unwrap();
    assert_eq!(last.remaining, 0);
    assert_eq!(last.winner.as_deref(), Some("ana"));

    let game = t.stores.games.require_game(t.game_id).unwrap();
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.winner, Some(ana));

    let err = t.flow.play_card(t.game_id, bo, card("red 5")).unwrap_err();
    assert!(err.is(ValidationKind::GameNotActive), "got {err:?}");
    let err = t.flow.buy_card(t.game_id, bo, 1).unwrap_err();
    assert!(err.is(ValidationKind::GameNotActive), "got {err:?}");

    let history = t.flow.history(t.game_id).unwrap();
    assert_eq!(
        history.last().map(|e| e.text.as_str()),
        Some("ana won the game")
    );
}

#[test]
fn win_records_one_point_for_the_winner() {
    let t = started_table(&["ana", "bo"]);
    let ana = t.id("ana");
    give(&t.stores, t.game_id, ana, &["green 7"]);

    let outcome = t.flow.play_card(t.game_id, ana, card("green 7")).unwrap();
    assert_eq!(outcome.winner.as_deref(), Some("ana"));

    let scores = t.stores.scores.scores_for_game(t.game_id).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].player_id, ana);
    assert_eq!(scores[0].points, 1);
}

#[test]
fn unmatched_card_is_rejected_and_nothing_moves() {
    let t = started_table(&["ana", "bo"]);
    let (ana, bo) = (t.id("ana"), t.id("bo"));
    give(&t.stores, t.game_id, ana, &["red 3", "blue 4", "red 8"]);
    give(&t.stores, t.game_id, bo, &["red 1"]);

    t.flow.play_card(t.game_id, ana, card("red 3")).unwrap();
    let err = t.flow.play_card(t.game_id, ana, card("blue 4")).unwrap_err();
    assert!(err.is(ValidationKind::IllegalPlay), "got {err:?}");

    assert_eq!(t.flow.current_turn(t.game_id).unwrap().as_deref(), Some("ana"));
    assert_eq!(t.flow.top_card(t.game_id).unwrap(), Some(card("red 3")));
    assert_eq!(t.flow.hand_of(ana).unwrap().len(), 2);
}

#[test]
fn card_not_in_hand_is_rejected_before_turn_check() {
    let t = started_table(&["ana", "bo"]);
    let (ana, bo) = (t.id("ana"), t.id("bo"));
    give(&t.stores, t.game_id, ana, &["red 3", "red 4"]);
    give(&t.stores, t.game_id, bo, &["red 1"]);
    t.flow.play_card(t.game_id, ana, card("red 3")).unwrap();

    // bo is out of turn and also lacks the card; ownership is reported
    let err = t.flow.play_card(t.game_id, bo, card("red 9")).unwrap_err();
    assert!(err.is(ValidationKind::CardNotOwned), "got {err:?}");
}

#[test]
fn wild_matches_anything_and_only_wild_or_same_face_follows() {
    let t = started_table(&["ana", "bo"]);
    let (ana, bo) = (t.id("ana"), t.id("bo"));
    give(&t.stores, t.game_id, ana, &["yellow 2", "wild wild", "green 5"]);
    give(&t.stores, t.game_id, bo, &["red 9", "wild wild-draw-four"]);

    t.flow.play_card(t.game_id, ana, card("yellow 2")).unwrap();
    let to_bo = t.flow.play_card(t.game_id, ana, card("wild wild")).unwrap();
    assert_eq!(to_bo.next_player, "bo");

    let err = t.flow.play_card(t.game_id, bo, card("red 9")).unwrap_err();
    assert!(err.is(ValidationKind::IllegalPlay), "got {err:?}");
    t.flow
        .play_card(t.game_id, bo, card("wild wild-draw-four"))
        .unwrap();
}

#[test]
fn discard_top_tracks_the_last_play() {
    let t = started_table(&["ana", "bo"]);
    let (ana, bo) = (t.id("ana"), t.id("bo"));
    give(&t.stores, t.game_id, ana, &["red 3", "red 4", "blue 7"]);
    give(&t.stores, t.game_id, bo, &["red 7", "green 1"]);

    for (player, text) in [(ana, "red 3"), (ana, "red 4"), (bo, "red 7"), (ana, "blue 7")] {
        t.flow.play_card(t.game_id, player, card(text)).unwrap();
        assert_eq!(t.flow.top_card(t.game_id).unwrap(), Some(card(text)));

        let top_id = t
            .stores
            .games
            .game_discard_top(t.game_id)
            .unwrap()
            .expect("discard top set");
        let record = t.stores.cards.find_card(top_id).unwrap().unwrap();
        assert_eq!(record.card, card(text));
    }

    let discarded = t.stores.cards.find_discarded_cards(t.game_id).unwrap();
    assert_eq!(discarded.len(), 4);
}

#[test]
fn unseated_player_cannot_play() {
    let t = started_table(&["ana", "bo"]);
    let zed = PlayerService::new(Arc::clone(&t.stores.players))
        .register("zed")
        .unwrap()
        .id;

    let err = t.flow.play_card(t.game_id, zed, card("red 1")).unwrap_err();
    assert!(err.is(ValidationKind::PlayerNotSeated), "got {err:?}");
}
