//! The payoff projection engine: pure amortization math, allocation, and
//! portfolio-level projections.

pub mod payoff;
pub mod projection;
pub mod schedule;

pub use payoff::{PayoffEngine, DEFAULT_TERM_MONTHS};
pub use projection::{DebtProjection, PayoffProjection, ProjectionService, StrategyComparison};
pub use schedule::{amortization_schedule, ScheduleEntry};
