//! Game state machine and candidate filter.
//!
//! State is an immutable-update value: every user action goes through the
//! single [`reduce`] function, which returns a new `GameState` instead of
//! mutating shared variables. The catalog itself never changes after load
//! and is passed in by reference.

use crate::catalog::Entry;
use crate::chain;

/// Why a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The selected name's effective last kana was the terminal nasal ン.
    TerminalKana,
    /// The chain could continue phonetically but no unused name matched.
    Exhausted,
}

impl EndReason {
    /// User-facing message shown on the game-over modal.
    pub fn message(&self) -> &'static str {
        match self {
            EndReason::TerminalKana => "「ン」がついた！",
            EndReason::Exhausted => "候補がいなくなった！",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Over(EndReason),
}

/// Full game state. Catalog entries are cloned into `history` on selection
/// so the state value owns its data outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Selections so far, in game order. No id appears twice.
    pub history: Vec<Entry>,
    /// Normalized kana the next name must start with; `None` means any
    /// (true only before the first selection, or after a name whose
    /// effective last kana was unusable).
    pub required_lead: Option<char>,
    pub phase: Phase,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            required_lead: None,
            phase: Phase::Active,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Final (or running) score: the number of names chained.
    pub fn score(&self) -> usize {
        self.history.len()
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.history.last()
    }

    fn contains(&self, id: u32) -> bool {
        self.history.iter().any(|e| e.id == id)
    }

    /// Whether `entry` may be selected in this state: game active, id not yet
    /// used, and the name starting with the required lead kana when one is
    /// set. Exact-script prefix match, no fuzzing.
    pub fn accepts(&self, entry: &Entry) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        if self.contains(entry.id) {
            return false;
        }
        match self.required_lead {
            None => true,
            Some(lead) => entry.name.starts_with(lead),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// User actions. The candidate grid only offers legal selections, but the
/// reducer is the authority: an illegal `Select` is a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(u32),
    Restart,
}

/// The eligible subsequence of the catalog: ids not yet in history whose
/// names match the required lead. Catalog order (ascending id) is preserved;
/// no limit is applied regardless of size.
pub fn candidates<'a>(catalog: &'a [Entry], state: &GameState) -> Vec<&'a Entry> {
    catalog.iter().filter(|e| state.accepts(e)).collect()
}

/// Apply one action and return the resulting state. The input state is never
/// modified.
pub fn reduce(state: &GameState, catalog: &[Entry], action: &Action) -> GameState {
    match action {
        Action::Restart => GameState::new(),
        Action::Select(id) => {
            let Some(entry) = catalog.iter().find(|e| e.id == *id) else {
                return state.clone();
            };
            if !state.accepts(entry) {
                return state.clone();
            }

            let mut history = state.history.clone();
            history.push(entry.clone());

            let raw = chain::effective_last_char(&entry.name);
            if raw == Some(chain::TERMINAL_KANA) {
                // The losing name stays in history and still counts.
                return GameState {
                    history,
                    required_lead: None,
                    phase: Phase::Over(EndReason::TerminalKana),
                };
            }

            let next = GameState {
                history,
                required_lead: raw.map(chain::normalize),
                phase: Phase::Active,
            };
            // Nothing left to pick means the game cannot continue; surface
            // that as an explicit end instead of a silently stuck board.
            if candidates(catalog, &next).is_empty() {
                return GameState {
                    phase: Phase::Over(EndReason::Exhausted),
                    ..next
                };
            }
            next
        }
    }
}
