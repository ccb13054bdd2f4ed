//! Drives a [`Game`] through a scripted list of actions and records the result.

use crate::config::ScriptConfig;
use derive_getters::Getters;
use serde::Serialize;
use strictly_santorini::{Action, Game, GameState, GodAssignment, Player, TurnPhase};
use tracing::{debug, info, instrument, warn};

/// What happened to one submitted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum StepOutcome {
    /// The action was applied.
    Accepted {
        /// Phase after the action.
        phase: TurnPhase,
        /// Player expected to act next.
        player: Player,
    },
    /// The action was refused and the state left as it was.
    Rejected {
        /// Why it was refused.
        error: String,
    },
}

/// One line of the match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct StepRecord {
    /// Position in the script, starting at 1.
    number: usize,
    /// Player who submitted the action.
    player: Player,
    /// The submitted action.
    action: Action,
    /// Result.
    outcome: StepOutcome,
}

impl StepRecord {
    /// True if the action was refused.
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, StepOutcome::Rejected { .. })
    }
}

/// Result of running a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MatchReport {
    gods: GodAssignment,
    steps: Vec<StepRecord>,
    final_state: GameState,
    stopped_early: bool,
}

impl MatchReport {
    /// Number of refused actions.
    pub fn rejections(&self) -> usize {
        self.steps.iter().filter(|s| s.is_rejected()).count()
    }
}

/// Plays scripted matches.
#[derive(Debug, Clone)]
pub struct Referee {
    script: ScriptConfig,
}

impl Referee {
    /// Creates a referee for `script`.
    pub fn new(script: &ScriptConfig) -> Self {
        Self {
            script: script.clone(),
        }
    }

    /// Submits every scripted action in order.
    ///
    /// Actions after the end of the game are still submitted, and rejected
    /// with `GameAlreadyEnded`. With `stop_on_rejection` set the run halts at
    /// the first refusal and the report is marked as stopped early.
    #[instrument(skip(self), fields(god_a = %self.script.god_a(), god_b = %self.script.god_b()))]
    pub fn run(&self) -> MatchReport {
        let mut game = Game::new(*self.script.god_a(), *self.script.god_b());
        let mut steps = Vec::with_capacity(self.script.actions().len());
        let mut stopped_early = false;

        for (i, action) in self.script.actions().iter().enumerate() {
            let player = game.query_game_state().current_player();
            let outcome = match game.submit_action(*action) {
                Ok(state) => {
                    debug!(step = i + 1, %player, %action, phase = %state.phase(), "Accepted");
                    StepOutcome::Accepted {
                        phase: state.phase(),
                        player: state.current_player(),
                    }
                }
                Err(rejection) => {
                    warn!(step = i + 1, %player, %action, error = %rejection, "Rejected");
                    StepOutcome::Rejected {
                        error: rejection.to_string(),
                    }
                }
            };
            let rejected = matches!(outcome, StepOutcome::Rejected { .. });
            steps.push(StepRecord {
                number: i + 1,
                player,
                action: *action,
                outcome,
            });

            if rejected && *self.script.stop_on_rejection() {
                stopped_early = i + 1 < self.script.actions().len();
                if stopped_early {
                    info!(step = i + 1, "Stopping at first rejection");
                }
                break;
            }
        }

        let final_state = game.into_state();
        match final_state.winner() {
            Some(winner) => info!(%winner, victory = ?final_state.victory(), "Match decided"),
            None => info!(phase = %final_state.phase(), "Match unfinished"),
        }

        MatchReport {
            gods: self.script.gods(),
            steps,
            final_state,
            stopped_early,
        }
    }
}

/// Formats a report for a terminal: one line per step, then the board.
pub fn render_text(report: &MatchReport) -> String {
    let gods = report.gods();
    let mut out = format!("A: {}  vs  B: {}\n\n", gods.a, gods.b);

    for step in report.steps() {
        let result = match step.outcome() {
            StepOutcome::Accepted { phase, player } => format!("ok -> {player} {phase}"),
            StepOutcome::Rejected { error } => format!("REJECTED: {error}"),
        };
        out.push_str(&format!(
            "{:>3}. {} {}: {}\n",
            step.number(),
            step.player(),
            step.action(),
            result
        ));
    }

    let state = report.final_state();
    out.push('\n');
    out.push_str(&state.board().display());
    out.push('\n');
    match (state.winner(), state.victory()) {
        (Some(winner), Some(victory)) => {
            out.push_str(&format!("Winner: {winner} ({victory})\n"));
        }
        _ => out.push_str(&format!(
            "In progress: {} to act, {} phase\n",
            state.current_player(),
            state.phase()
        )),
    }
    if *report.stopped_early() {
        out.push_str("Stopped at the first rejected action.\n");
    }
    out
}
