//! Error types for the search engine.
//!
//! Walk failures are reported per ant; the generation loop decides whether
//! they are fatal (see [`AcoError::AllAntsFailed`]).

use pheromaze_data::{Coordinate, RouteError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcoError {
    /// The ant backed out all the way to its start with nowhere left to go.
    #[error("no feasible route remains from {start}")]
    NoFeasibleRoute { start: Coordinate },

    /// The ant used up its move + backtrack allowance.
    #[error("walk exceeded its step budget of {budget}")]
    StepBudgetExhausted { budget: usize },

    #[error("coordinate {0} is outside the maze")]
    OutOfBounds(Coordinate),

    /// Pheromone readings that cannot form a probability distribution.
    #[error("cannot sample a direction at {position}: {reason}")]
    DegenerateWeights { position: Coordinate, reason: String },

    #[error("endpoint {0} is a wall")]
    InaccessibleEndpoint(Coordinate),

    /// Every ant of a generation failed, so there is nothing to deposit.
    #[error("all {ants} ants failed in generation {generation}")]
    AllAntsFailed { generation: usize, ants: usize },

    #[error("invalid maze: {0}")]
    InvalidMaze(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<RouteError> for AcoError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::Empty { start } => Self::NoFeasibleRoute { start },
        }
    }
}

impl AcoError {
    /// True for failures that end a single ant's walk but not the run.
    #[must_use]
    pub fn is_walk_failure(&self) -> bool {
        matches!(
            self,
            Self::NoFeasibleRoute { .. } | Self::StepBudgetExhausted { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AcoError>;
