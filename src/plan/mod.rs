//! Motion planning: DNF goals to minimal arm-action sequences.
//!
//! The planner runs the generic A* engine over the implicit world graph with
//! the relation-specific heuristic bank. A goal already satisfied by the
//! start state yields the sentinel plan string instead of an empty one.

pub mod graph;
pub mod heuristic;

pub use self::graph::{execute, ArmAction};

use std::time::Duration;

use crate::error::{PlanError, PlanResult};
use crate::interpret::{DnfFormula, Interpretation};
use crate::search::{self, SearchConfig, SearchOutcome};
use crate::world::WorldState;

/// Plan string attached when zero actions suffice.
pub const ALREADY_TRUE: &str = "The interpretation is already true!";

/// Planner parameters.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Wall-clock deadline per interpretation.
    pub timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// A successful planning result.
#[derive(Debug, Clone)]
pub struct Planned {
    /// The action string over `{l, r, p, d}`, or [`ALREADY_TRUE`].
    pub plan: String,
    /// Optimal cost; equals the action string length.
    pub cost: u32,
    /// Distinct world configurations seen during the search.
    pub nodes_seen: usize,
}

/// An interpretation augmented with its plan.
#[derive(Debug, Clone)]
pub struct PlannedInterpretation {
    pub interpretation: Interpretation,
    pub planned: Planned,
}

/// Find a minimal action sequence from `world` to some state satisfying
/// `formula`.
pub fn plan_formula(
    world: &WorldState,
    formula: &DnfFormula,
    config: PlannerConfig,
) -> PlanResult<Planned> {
    let outcome = search::astar(
        world.clone(),
        |state: &WorldState| formula.satisfied_in(state),
        |state: &WorldState| heuristic::estimate(state, formula),
        SearchConfig {
            timeout: config.timeout,
        },
    );

    match outcome {
        SearchOutcome::Success {
            path,
            cost,
            nodes_seen,
            elapsed,
        } => {
            let plan = if path.is_empty() {
                ALREADY_TRUE.to_string()
            } else {
                ArmAction::encode(&path)
            };
            tracing::info!(
                cost,
                nodes_seen,
                elapsed_ms = elapsed.as_millis() as u64,
                plan = %plan,
                "planning succeeded"
            );
            Ok(Planned {
                plan,
                cost,
                nodes_seen,
            })
        }
        SearchOutcome::Timeout {
            nodes_seen,
            elapsed,
        } => Err(PlanError::Timeout {
            seconds: elapsed.as_secs_f64(),
            nodes: nodes_seen,
        }),
        SearchOutcome::Failure { nodes_seen, .. } => Err(PlanError::Unreachable {
            nodes: nodes_seen,
        }),
    }
}

/// Plan every interpretation, keeping the ones that succeed.
///
/// Fails only when all interpretations time out or fail; the message joins
/// the distinct per-interpretation messages with `" ; "`.
pub fn plan(
    interpretations: &[Interpretation],
    world: &WorldState,
    config: PlannerConfig,
) -> PlanResult<Vec<PlannedInterpretation>> {
    let mut planned = Vec::new();
    let mut messages: Vec<String> = Vec::new();

    for interpretation in interpretations {
        match plan_formula(world, &interpretation.formula, config) {
            Ok(result) => planned.push(PlannedInterpretation {
                interpretation: interpretation.clone(),
                planned: result,
            }),
            Err(error) => {
                let message = error.to_string();
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }
    }

    if planned.is_empty() {
        return Err(PlanError::NoPlan {
            messages: messages.join(" ; "),
        });
    }
    Ok(planned)
}
