//! Energy-aware task scheduling
//!
//! Given a list of tasks and the user's current energy level, the engine
//! produces a proposed ordering of the tasks into sequential time slots with
//! a per-task confidence score:
//!
//! - **High energy (8-10)**: front-load demanding tasks (high priority, long
//!   duration)
//! - **Medium energy (4-7)**: balance priority against effort
//! - **Low energy (1-3)**: quick wins first (shortest duration)
//!
//! Packing is strictly sequential with a fixed 10-minute buffer before every
//! slot. The engine is a pure function over its inputs apart from the
//! confidence jitter, which is drawn from an explicitly injected random
//! source (see [`schedule_with_rng`]).

mod engine;
mod strategy;
mod types;

pub use engine::{schedule, schedule_with_rng};
pub use strategy::EnergyBand;
pub use types::{
    Result, ScheduleRequest, ScheduledTask, SchedulerError, Task, UserState, TASK_BUFFER_MINUTES,
};
