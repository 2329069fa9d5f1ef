//! Tabu Search execution engine for the QAP.
//!
//! # Algorithm
//!
//! 1. Stop if the current cost is within the allowed gap of the optimum
//! 2. Cost every pairwise swap of the current assignment
//! 3. Pick the cheapest swap that is not tabu (ties keep the first one)
//! 4. Stop if no swap is admissible or the iteration cap is reached
//! 5. Otherwise arm the swap in the tabu list, move to it and update the
//!    best-ever assignment if it improved
//!
//! The search may move uphill, so the returned result is the best
//! assignment ever visited rather than the last one.

use std::fmt;

use tracing::{debug, info, trace};

use super::combinations::combinations;
use super::config::QapConfig;
use super::cost::{locate, CostEvaluator};
use super::error::{QapError, Result};
use super::instance::QapInstance;
use super::tabu_list::TabuList;
use super::types::{is_valid_assignment, Action, Assignment, Cost};

/// Why a search stopped. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The current cost reached the allowed threshold.
    ConvergedBelowThreshold,
    /// Every swap was forbidden.
    ExhaustedNeighborhood,
    /// The iteration cap was reached.
    MaxIterationsExceeded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::ConvergedBelowThreshold => "converged below threshold",
            StopReason::ExhaustedNeighborhood => "ran out of available choices",
            StopReason::MaxIterationsExceeded => "exceeded max iterations",
        })
    }
}

/// Lifecycle of a [`QapSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverState {
    Running,
    Stopped(StopReason),
}

/// Snapshot reported after every committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Number of moves committed so far.
    pub iteration: usize,
    /// Cost of the move just committed.
    pub local_cost: Cost,
    /// Best cost found so far.
    pub best_cost: Cost,
}

/// Outcome of a single [`QapSolver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Moved(Progress),
    Stopped(StopReason),
}

/// Result of a QAP Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QapResult {
    /// Best assignment found.
    pub best: Assignment,
    /// Cost of the best assignment.
    pub best_cost: Cost,
    /// Moves committed before stopping.
    pub iterations: usize,
    /// Move at which the best assignment was found (0 if never improved).
    pub best_iteration: usize,
    /// Why the search stopped.
    pub stop_reason: StopReason,
    /// Best cost after each committed move.
    pub cost_history: Vec<Cost>,
}

impl QapResult {
    /// `(best, best_cost)`.
    pub fn into_pair(self) -> (Assignment, Cost) {
        (self.best, self.best_cost)
    }
}

struct Candidate {
    action: Action,
    cost: Cost,
    assignment: Assignment,
}

/// Tabu Search over pairwise facility swaps.
///
/// # Examples
///
/// ```
/// use u_qap::qap::{row_major_assignment, QapConfig, QapInstance, QapSolver, StopReason};
///
/// let config = QapConfig::default().with_allowed_percent_error(0.1);
/// let mut solver = QapSolver::new(row_major_assignment(), &QapInstance::nug20(), config).unwrap();
/// let result = solver.solve().unwrap();
///
/// assert_eq!(result.stop_reason, StopReason::ConvergedBelowThreshold);
/// assert!(result.best_cost <= 2827);
/// ```
#[derive(Debug, Clone)]
pub struct QapSolver {
    config: QapConfig,
    evaluator: CostEvaluator,
    tabu: TabuList,
    min_allowed_cost: f64,
    current: Assignment,
    current_cost: Cost,
    best: Assignment,
    best_cost: Cost,
    best_iteration: usize,
    iteration: usize,
    state: SolverState,
    cost_history: Vec<Cost>,
}

impl QapSolver {
    /// Creates a solver starting from `initial`.
    ///
    /// Fails with [`QapError::InvalidAssignment`] unless `initial` holds
    /// every facility id exactly once, and with
    /// [`QapError::InvalidErrorBound`] unless the allowed error is in
    /// `[0, 1]`.
    pub fn new(initial: Assignment, instance: &QapInstance, config: QapConfig) -> Result<Self> {
        if !is_valid_assignment(&initial) {
            return Err(QapError::InvalidAssignment);
        }
        config.validate()?;

        let evaluator = CostEvaluator::new(*instance.flows());
        let initial_cost = evaluator.evaluate(&initial)?;
        let min_allowed_cost = (1.0 + config.allowed_percent_error) * instance.optimal_cost() as f64;

        Ok(Self {
            tabu: TabuList::new(config.tabu_tenure),
            cost_history: Vec::new(),
            config,
            evaluator,
            min_allowed_cost,
            current: initial,
            current_cost: initial_cost,
            best: initial,
            best_cost: initial_cost,
            best_iteration: 0,
            iteration: 0,
            state: SolverState::Running,
        })
    }

    /// Solver on the `nug20` instance with default settings.
    pub fn nug20(initial: Assignment, allowed_percent_error: f64) -> Result<Self> {
        let config = QapConfig::default().with_allowed_percent_error(allowed_percent_error);
        Self::new(initial, &QapInstance::nug20(), config)
    }

    /// Runs until a stop condition holds.
    pub fn solve(&mut self) -> Result<QapResult> {
        self.solve_with_progress(|_| {})
    }

    /// Runs until a stop condition holds, calling `on_progress` after every
    /// committed move.
    pub fn solve_with_progress<F>(&mut self, mut on_progress: F) -> Result<QapResult>
    where
        F: FnMut(&Progress),
    {
        info!(
            event = "solve_start",
            initial_cost = self.current_cost,
            threshold = self.min_allowed_cost,
            max_iterations = self.config.max_iterations,
            tabu_tenure = self.config.tabu_tenure,
        );

        let reason = loop {
            match self.step()? {
                Step::Moved(progress) => on_progress(&progress),
                Step::Stopped(reason) => break reason,
            }
        };

        info!(
            event = "solve_end",
            reason = %reason,
            iterations = self.iteration,
            best_cost = self.best_cost,
        );

        Ok(QapResult {
            best: self.best,
            best_cost: self.best_cost,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            stop_reason: reason,
            cost_history: self.cost_history.clone(),
        })
    }

    /// Performs one iteration of the search.
    ///
    /// Once stopped, further calls return the same reason without doing any
    /// work.
    pub fn step(&mut self) -> Result<Step> {
        if let SolverState::Stopped(reason) = self.state {
            return Ok(Step::Stopped(reason));
        }
        if self.current_cost as f64 <= self.min_allowed_cost {
            return Ok(self.stop(StopReason::ConvergedBelowThreshold));
        }
        debug_assert!(is_valid_assignment(&self.current));

        let Some(candidate) = self.best_candidate()? else {
            return Ok(self.stop(StopReason::ExhaustedNeighborhood));
        };
        if self.iteration >= self.config.max_iterations {
            return Ok(self.stop(StopReason::MaxIterationsExceeded));
        }

        self.tabu.register_move(candidate.action)?;
        self.current = candidate.assignment;
        self.current_cost = candidate.cost;
        self.iteration += 1;
        if candidate.cost < self.best_cost {
            self.best = self.current;
            self.best_cost = candidate.cost;
            self.best_iteration = self.iteration;
        }
        self.cost_history.push(self.best_cost);

        debug!(
            event = "iteration",
            iteration = self.iteration,
            cost = candidate.cost,
            best_cost = self.best_cost,
            swap = ?candidate.action.key(),
        );

        Ok(Step::Moved(Progress {
            iteration: self.iteration,
            local_cost: candidate.cost,
            best_cost: self.best_cost,
        }))
    }

    fn stop(&mut self, reason: StopReason) -> Step {
        self.state = SolverState::Stopped(reason);
        Step::Stopped(reason)
    }

    fn best_candidate(&self) -> Result<Option<Candidate>> {
        let mut best: Option<Candidate> = None;

        for &(val1, val2) in combinations() {
            let action = Action::new(val1, val2);
            let forbidden = self.tabu.is_forbidden(action)?;
            if forbidden && !self.config.aspiration {
                continue;
            }

            let mut hypothesis = self.current;
            let loc1 = locate(&hypothesis, val1)?;
            let loc2 = locate(&hypothesis, val2)?;
            hypothesis.swap(loc1, loc2)?;
            let cost = self.evaluator.evaluate(&hypothesis)?;

            if forbidden && cost >= self.best_cost {
                continue;
            }
            if forbidden {
                trace!(event = "aspiration", swap = ?action.key(), cost);
            }

            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Candidate {
                    action,
                    cost,
                    assignment: hypothesis,
                });
            }
        }

        Ok(best)
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Moves committed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn current(&self) -> &Assignment {
        &self.current
    }

    pub fn current_cost(&self) -> Cost {
        self.current_cost
    }

    pub fn best(&self) -> &Assignment {
        &self.best
    }

    pub fn best_cost(&self) -> Cost {
        self.best_cost
    }

    /// Move at which the best assignment was found.
    pub fn best_iteration(&self) -> usize {
        self.best_iteration
    }

    /// Cost at or below which the search reports convergence.
    pub fn min_allowed_cost(&self) -> f64 {
        self.min_allowed_cost
    }

    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    pub fn config(&self) -> &QapConfig {
        &self.config
    }

    /// Scores an arbitrary assignment with this solver's flow matrix.
    #[cfg(any(test, feature = "test-support"))]
    pub fn cost_of(&self, assignment: &Assignment) -> Result<Cost> {
        self.evaluator.evaluate(assignment)
    }
}
