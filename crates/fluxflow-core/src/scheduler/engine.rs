//! The scheduling engine: ordering, time packing, and confidence scoring

use chrono::Duration;
use rand::Rng;
use tracing::debug;

use super::strategy::EnergyBand;
use super::types::{Result, ScheduledTask, SchedulerError, Task, UserState, TASK_BUFFER_MINUTES};

// Confidence constants are fixed behavioral values, not tunables.
const BASE_CONFIDENCE: f64 = 0.75;
const HIGH_FOCUS_CONFIDENCE: f64 = 0.90;
const QUICK_WIN_CONFIDENCE: f64 = 0.85;
const CONFIDENCE_JITTER_MAX: f64 = 0.1;

const HIGH_FOCUS_MIN_PRIORITY: u8 = 4;
const QUICK_WIN_MAX_MINUTES: u32 = 30;

/// Schedule tasks using the process-wide random source for confidence jitter.
///
/// Ordering and timestamps are fully deterministic for a given input; only
/// the confidence scores vary between calls.
pub fn schedule(tasks: &[Task], user_state: &UserState) -> Result<Vec<ScheduledTask>> {
    schedule_with_rng(tasks, user_state, &mut rand::thread_rng())
}

/// Schedule tasks with an explicit random source.
///
/// The engine assumes its input has already passed
/// [`validation`](crate::validation); out-of-range values do not panic but
/// may produce scores outside the documented bands.
///
/// The algorithm:
/// 1. Pick an ordering strategy from the user's [`EnergyBand`] and stable-sort
///    the tasks with it (ties keep submission order).
/// 2. Walk the ordered list, placing each task 10 minutes after the previous
///    slot ends (the first 10 minutes after `current_time`).
/// 3. Score each task independently: a base confidence from the energy/task
///    alignment plus a fresh uniform draw in [0, 0.1), capped at 1.0.
pub fn schedule_with_rng<R: Rng + ?Sized>(
    tasks: &[Task],
    user_state: &UserState,
    rng: &mut R,
) -> Result<Vec<ScheduledTask>> {
    let band = EnergyBand::from_energy_level(user_state.energy_level);
    debug!(
        ?band,
        tasks = tasks.len(),
        energy = user_state.energy_level,
        "ordering tasks"
    );

    let mut ordered: Vec<&Task> = tasks.iter().collect();
    // sort_by is stable, so equal keys preserve submission order
    ordered.sort_by(|a, b| band.compare(a, b));

    let buffer = Duration::minutes(TASK_BUFFER_MINUTES);
    let mut cursor = user_state.current_time;
    let mut scheduled = Vec::with_capacity(ordered.len());

    for task in ordered {
        let start_time = cursor
            .checked_add_signed(buffer)
            .ok_or_else(|| overflow(task))?;
        let end_time = start_time
            .checked_add_signed(Duration::minutes(i64::from(task.estimated_duration_minutes)))
            .ok_or_else(|| overflow(task))?;

        scheduled.push(ScheduledTask {
            task_id: task.id.clone(),
            start_time,
            end_time,
            confidence_score: confidence_score(band, task, rng),
        });

        cursor = end_time;
    }

    Ok(scheduled)
}

fn overflow(task: &Task) -> SchedulerError {
    SchedulerError::TimeOverflow {
        task_id: task.id.clone(),
    }
}

/// Confidence that the user completes a task in its slot, based on how well
/// the task aligns with the current energy band.
fn confidence_score<R: Rng + ?Sized>(band: EnergyBand, task: &Task, rng: &mut R) -> f64 {
    let base = match band {
        EnergyBand::High if task.priority >= HIGH_FOCUS_MIN_PRIORITY => HIGH_FOCUS_CONFIDENCE,
        EnergyBand::Low if task.estimated_duration_minutes <= QUICK_WIN_MAX_MINUTES => {
            QUICK_WIN_CONFIDENCE
        }
        _ => BASE_CONFIDENCE,
    };
    let jitter = rng.gen::<f64>() * CONFIDENCE_JITTER_MAX;
    (base + jitter).min(1.0)
}
