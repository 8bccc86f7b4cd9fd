// Native tests for the game state reducer and candidate filter.

use kana_shiritori::catalog::Entry;
use kana_shiritori::game::{Action, EndReason, GameState, Phase, candidates, reduce};

fn entry(id: u32, name: &str) -> Entry {
    Entry::new(id, name)
}

fn demo_catalog() -> Vec<Entry> {
    vec![
        entry(1, "ピカチュウ"),
        entry(2, "ウツボット"),
        entry(3, "ドガース"),
        entry(4, "トゲピー"),
    ]
}

fn ids(list: &[&Entry]) -> Vec<u32> {
    list.iter().map(|e| e.id).collect()
}

#[test]
fn initial_state_has_no_constraint() {
    let state = GameState::new();
    assert!(state.history.is_empty());
    assert_eq!(state.required_lead, None);
    assert_eq!(state.phase, Phase::Active);
    assert_eq!(state.score(), 0);
}

#[test]
fn select_appends_and_sets_required_lead() {
    let catalog = demo_catalog();
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.last_entry().map(|e| e.id), Some(1));
    // ピカチュウ ends in ウ (no elongation involved).
    assert_eq!(state.required_lead, Some('ウ'));
    assert_eq!(state.phase, Phase::Active);
}

#[test]
fn reducer_never_mutates_its_input() {
    let catalog = demo_catalog();
    let before = GameState::new();
    let _after = reduce(&before, &catalog, &Action::Select(1));
    assert_eq!(before, GameState::new());
}

#[test]
fn selecting_an_already_used_id_is_a_noop() {
    let catalog = demo_catalog();
    let once = reduce(&GameState::new(), &catalog, &Action::Select(1));
    let twice = reduce(&once, &catalog, &Action::Select(1));
    assert_eq!(once, twice);
}

#[test]
fn selecting_a_name_with_wrong_lead_is_a_noop() {
    let catalog = demo_catalog();
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(state.required_lead, Some('ウ'));
    // ドガース does not start with ウ.
    let next = reduce(&state, &catalog, &Action::Select(3));
    assert_eq!(state, next);
}

#[test]
fn selecting_an_unknown_id_is_a_noop() {
    let catalog = demo_catalog();
    let state = GameState::new();
    assert_eq!(reduce(&state, &catalog, &Action::Select(99)), state);
}

#[test]
fn name_ending_in_terminal_kana_ends_the_game() {
    let catalog = vec![entry(1, "カビゴン"), entry(2, "ピカチュウ")];
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(state.phase, Phase::Over(EndReason::TerminalKana));
    // The losing selection stays in history and counts toward the score.
    assert_eq!(state.score(), 1);
    assert_eq!(state.last_entry().map(|e| e.id), Some(1));
    assert_eq!(
        EndReason::TerminalKana.message(),
        "「ン」がついた！"
    );
}

#[test]
fn name_ending_in_elongation_mark_is_not_terminal() {
    // フリーザー chains on ザ; only a literal effective ン ends the game.
    let catalog = vec![entry(1, "フリーザー"), entry(2, "ザングース")];
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(state.phase, Phase::Active);
    assert_eq!(state.required_lead, Some('ザ'));
}

#[test]
fn small_kana_lead_is_normalized() {
    // A name ending in a small kana chains on its base form: ュ requires ユ.
    let catalog = vec![entry(1, "ラプラッシュ"), entry(2, "ユキワラシ")];
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(state.required_lead, Some('ユ'));
    assert_eq!(ids(&candidates(&catalog, &state)), vec![2]);
}

#[test]
fn selecting_after_game_over_is_a_noop() {
    let catalog = vec![entry(1, "カビゴン"), entry(2, "ピカチュウ")];
    let over = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert!(over.is_over());
    let after = reduce(&over, &catalog, &Action::Select(2));
    assert_eq!(over, after);
}

#[test]
fn restart_resets_from_any_state() {
    let catalog = demo_catalog();
    let mid = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(reduce(&mid, &catalog, &Action::Restart), GameState::new());

    let over_catalog = vec![entry(1, "カビゴン")];
    let over = reduce(&GameState::new(), &over_catalog, &Action::Select(1));
    assert!(over.is_over());
    assert_eq!(reduce(&over, &over_catalog, &Action::Restart), GameState::new());
}

#[test]
fn unconstrained_filter_returns_catalog_minus_history() {
    let catalog = demo_catalog();
    assert_eq!(ids(&candidates(&catalog, &GameState::new())), vec![1, 2, 3, 4]);

    let state = GameState {
        history: vec![entry(2, "ウツボット")],
        required_lead: None,
        phase: Phase::Active,
    };
    assert_eq!(ids(&candidates(&catalog, &state)), vec![1, 3, 4]);
}

#[test]
fn filter_never_returns_used_ids() {
    let catalog = demo_catalog();
    let state = reduce(&GameState::new(), &catalog, &Action::Select(1));
    for e in candidates(&catalog, &state) {
        assert!(!state.history.iter().any(|h| h.id == e.id));
    }
}

#[test]
fn chain_playthrough_ends_when_no_candidate_remains() {
    let catalog = demo_catalog();

    // ピカチュウ → required ウ; only ウツボット qualifies.
    let s1 = reduce(&GameState::new(), &catalog, &Action::Select(1));
    assert_eq!(s1.required_lead, Some('ウ'));
    assert_eq!(ids(&candidates(&catalog, &s1)), vec![2]);

    // ウツボット ends in ト, not ン — the game continues on ト.
    let s2 = reduce(&s1, &catalog, &Action::Select(2));
    assert_eq!(s2.phase, Phase::Active);
    assert_eq!(s2.required_lead, Some('ト'));
    assert_eq!(ids(&candidates(&catalog, &s2)), vec![4]);

    // トゲピー chains on ピ; the only ピ name is already used, so the game
    // ends explicitly rather than sitting on an empty grid.
    let s3 = reduce(&s2, &catalog, &Action::Select(4));
    assert_eq!(s3.phase, Phase::Over(EndReason::Exhausted));
    assert_eq!(s3.score(), 3);
    assert!(candidates(&catalog, &s3).is_empty());
}
