//! The shared game state bridging perception and actuation.
//!
//! [`GameStore`] owns the latest observation and the active route behind
//! one mutex. Perception writes through
//! [`update_observation`](GameStore::update_observation), which decides
//! whether the current route is still valid and replans synchronously when
//! it is not. Actuation consumes the route one step at a time through
//! [`take_next_step`](GameStore::take_next_step). Neither loop sees the
//! other's half-finished work.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use gridpilot_core::{Cell, Direction, Obstacles};
use gridpilot_planner::{Route, RoutePlanner, Step};
use gridpilot_space::Grid;
use tracing::{trace, warn};

static STORE_LOCK_POISON_WARNED: AtomicBool = AtomicBool::new(false);

fn warn_store_lock_poison_once(operation: &'static str) {
    if STORE_LOCK_POISON_WARNED
        .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
    {
        warn!(operation, "store lock poisoned; recovered inner value");
    }
}

// ── Observation ────────────────────────────────────────────────────

/// A complete, in-bounds observation ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// The agent's head cell.
    pub agent: Cell,
    /// The agent's orientation, if perception reported one.
    pub heading: Option<Direction>,
    /// The cell to reach.
    pub target: Cell,
    /// Cells the route must not enter.
    pub obstacles: Obstacles,
}

impl Observation {
    /// An observation without heading.
    pub fn new(agent: Cell, target: Cell, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            agent,
            heading: None,
            target,
            obstacles: obstacles.into_iter().collect(),
        }
    }

    /// Attach the agent's heading.
    pub fn with_heading(mut self, heading: Direction) -> Self {
        self.heading = Some(heading);
        self
    }
}

// ── RoutePhase / outcomes ──────────────────────────────────────────

/// Lifecycle of the active route.
///
/// `Empty → Planned → Consuming → (Empty | Planned)`. Any replan moves to
/// `Planned` (or `Empty` if the target is unreachable); exhausting the
/// route moves to `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoutePhase {
    /// No route is active.
    #[default]
    Empty,
    /// A fresh route has been planned and no step taken from it yet.
    Planned,
    /// At least one step has been taken from the current route.
    Consuming,
}

/// Why the store decided to replan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplanReason {
    /// The observed target differs from the target of the last successful
    /// plan. A target that was unreachable never becomes the planned
    /// target, so every retry against it reports this reason too.
    TargetChanged,
    /// No route was active.
    NoRoute,
    /// The agent is not on the head of the active route.
    Stale,
}

impl ReplanReason {
    /// Snake-case label for structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TargetChanged => "target_changed",
            Self::NoRoute => "no_route",
            Self::Stale => "stale",
        }
    }
}

impl fmt::Display for ReplanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What [`GameStore::update_observation`] did with an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The active route is still valid and was left untouched.
    Kept,
    /// The previous route was used up on this target and the agent stands
    /// on it; nothing to do until a new target appears.
    Holding,
    /// A new route was planned and installed.
    Replanned {
        /// What triggered the replan.
        reason: ReplanReason,
        /// Moves in the new route.
        hops: usize,
    },
    /// Replanning found no route; the store is now empty.
    Unreachable {
        /// What triggered the replan.
        reason: ReplanReason,
    },
}

impl UpdateOutcome {
    /// Whether the planner ran.
    pub fn planned(&self) -> bool {
        matches!(self, Self::Replanned { .. } | Self::Unreachable { .. })
    }
}

/// Consistent copy of the store's contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Last observed agent cell.
    pub agent: Option<Cell>,
    /// Last observed heading.
    pub heading: Option<Direction>,
    /// Last observed target cell.
    pub target: Option<Cell>,
    /// Last observed obstacles, excluding the agent's cell.
    pub obstacles: Obstacles,
    /// The active route, if any.
    pub route: Option<Route>,
    /// Lifecycle phase of the route.
    pub phase: RoutePhase,
    /// Number of replans performed so far.
    pub generation: u64,
}

// ── GameStore ──────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct StoreState {
    agent: Option<Cell>,
    heading: Option<Direction>,
    target: Option<Cell>,
    obstacles: Obstacles,
    /// Target of the last plan that produced a route.
    planned_target: Option<Cell>,
    /// Target of the last route consumed to its end.
    exhausted_target: Option<Cell>,
    route: Option<Route>,
    phase: RoutePhase,
    generation: u64,
}

impl StoreState {
    fn replan_reason(&self, agent: Cell, target: Cell) -> Option<ReplanReason> {
        if self.planned_target != Some(target) {
            return Some(ReplanReason::TargetChanged);
        }
        match &self.route {
            None if self.exhausted_target == Some(target) && agent == target => None,
            None => Some(ReplanReason::NoRoute),
            Some(route) if route.head() != agent => Some(ReplanReason::Stale),
            Some(_) => None,
        }
    }

    fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            agent: self.agent,
            heading: self.heading,
            target: self.target,
            obstacles: self.obstacles.clone(),
            route: self.route.clone(),
            phase: self.phase,
            generation: self.generation,
        }
    }
}

/// Mutex-guarded game state and active route.
///
/// Created empty. All methods take `&self`; share it between threads with
/// an `Arc`.
///
/// # Examples
///
/// ```
/// use gridpilot_core::Cell;
/// use gridpilot_engine::{GameStore, Observation, RoutePhase};
/// use gridpilot_planner::RoutePlanner;
/// use gridpilot_space::Grid;
///
/// let store = GameStore::new(RoutePlanner::with_default_order(Grid::torus(4, 4).unwrap()));
/// store.update_observation(Observation::new(Cell::new(0, 0), Cell::new(0, 2), []));
/// assert_eq!(store.phase(), RoutePhase::Planned);
///
/// let step = store.take_next_step().unwrap();
/// assert_eq!(step.to, Cell::new(0, 1));
/// assert_eq!(store.phase(), RoutePhase::Consuming);
/// ```
#[derive(Debug)]
pub struct GameStore {
    planner: RoutePlanner,
    state: Mutex<StoreState>,
}

impl GameStore {
    /// An empty store planning with `planner`.
    pub fn new(planner: RoutePlanner) -> Self {
        Self {
            planner,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// The grid routes are planned on.
    pub fn grid(&self) -> &Grid {
        self.planner.grid()
    }

    /// The planner used for replans.
    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    fn lock(&self, operation: &'static str) -> MutexGuard<'_, StoreState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn_store_lock_poison_once(operation);
                poisoned.into_inner()
            }
        }
    }

    /// Record an observation and replan if the active route no longer
    /// fits it.
    ///
    /// Replans when the target changed since the last successful plan,
    /// when no route is active, or when the agent is not on the route's
    /// head. A route that was used up on an unchanged target while the
    /// agent stands on that target is not replanned.
    ///
    /// The agent's own cell is removed from the stored obstacles. Planning
    /// runs under the lock, so the old route is replaced atomically.
    pub fn update_observation(&self, observation: Observation) -> UpdateOutcome {
        let Observation {
            agent,
            heading,
            target,
            mut obstacles,
        } = observation;
        obstacles.shift_remove(&agent);

        let mut state = self.lock("update_observation");
        state.agent = Some(agent);
        state.heading = heading;
        state.target = Some(target);
        state.obstacles = obstacles;

        let Some(reason) = state.replan_reason(agent, target) else {
            return if state.route.is_some() {
                UpdateOutcome::Kept
            } else {
                UpdateOutcome::Holding
            };
        };

        let planned = self.planner.plan(agent, target, &state.obstacles);
        state.generation += 1;
        let outcome = match planned {
            Some(route) => {
                let hops = route.hops();
                state.planned_target = Some(target);
                state.exhausted_target = None;
                state.route = Some(route);
                state.phase = RoutePhase::Planned;
                UpdateOutcome::Replanned { reason, hops }
            }
            None => {
                state.route = None;
                state.phase = RoutePhase::Empty;
                UpdateOutcome::Unreachable { reason }
            }
        };
        trace!(
            generation = state.generation,
            reason = reason.as_str(),
            route = %RouteField(state.route.as_ref()),
            "store_replanned"
        );
        outcome
    }

    /// Pop the route's head and return the move onto the next cell.
    ///
    /// Returns `None` when no route is active or the agent is already on
    /// the target. A route whose last move has been taken is dropped, and
    /// the store returns to [`RoutePhase::Empty`].
    pub fn take_next_step(&self) -> Option<Step> {
        let mut state = self.lock("take_next_step");
        let route = state.route.as_mut()?;
        let step = route.advance();
        if route.is_terminal() {
            let target = route.target();
            state.route = None;
            state.exhausted_target = Some(target);
            state.phase = RoutePhase::Empty;
        } else if step.is_some() {
            state.phase = RoutePhase::Consuming;
        }
        step
    }

    /// Consistent copy of everything the store holds.
    pub fn snapshot(&self) -> GameSnapshot {
        self.lock("snapshot").to_snapshot()
    }

    /// Current route phase.
    pub fn phase(&self) -> RoutePhase {
        self.lock("phase").phase
    }

    /// Copy of the active route.
    pub fn route(&self) -> Option<Route> {
        self.lock("route").route.clone()
    }

    /// Number of replans performed so far. Unchanged by observations that
    /// keep the current route.
    pub fn generation(&self) -> u64 {
        self.lock("generation").generation
    }
}

/// Formats an optional route for trace fields.
struct RouteField<'a>(Option<&'a Route>);

impl fmt::Display for RouteField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(route) => write!(f, "{route}"),
            None => f.write_str("none"),
        }
    }
}
