//! Core scheduling engine for FluxFlow
//!
//! This crate holds the pure, transport-free half of the service: the
//! energy-aware scheduling algorithm and the request validation rules it
//! relies on. The HTTP layer lives in the `fluxflow` binary crate and only
//! ever hands this crate already-deserialized data.

#![forbid(unsafe_code)]

pub mod scheduler;
pub mod validation;

pub use scheduler::{
    schedule, schedule_with_rng, EnergyBand, ScheduleRequest, ScheduledTask, SchedulerError, Task,
    UserState,
};
pub use validation::ValidationError;
