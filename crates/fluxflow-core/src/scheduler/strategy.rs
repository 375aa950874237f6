//! Energy band classification and per-band ordering strategies

use std::cmp::Ordering;

use super::types::Task;

/// Energy band derived from the user's reported energy level.
///
/// Each band carries its own ordering strategy, selected once per request.
/// The sort applying these comparisons must be stable so that tasks with
/// equal keys keep their submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyBand {
    /// Energy 8-10: demanding tasks first
    High,
    /// Energy 4-7: balance priority and effort
    Medium,
    /// Energy 1-3: quick wins first
    Low,
}

impl EnergyBand {
    /// Classify an energy level (1-10) into a band
    pub fn from_energy_level(energy_level: u8) -> Self {
        if energy_level >= 8 {
            EnergyBand::High
        } else if energy_level >= 4 {
            EnergyBand::Medium
        } else {
            EnergyBand::Low
        }
    }

    /// Numeric sort key for a task under this band's strategy
    fn sort_key(&self, task: &Task) -> f64 {
        let priority = f64::from(task.priority);
        let duration = f64::from(task.estimated_duration_minutes);
        match self {
            EnergyBand::High => priority * 2.0 + duration / 30.0,
            EnergyBand::Medium => priority + duration / 60.0,
            EnergyBand::Low => duration,
        }
    }

    /// Compare two tasks under this band's strategy.
    ///
    /// High and Medium order by descending key; Low orders by ascending
    /// duration.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let (ka, kb) = (self.sort_key(a), self.sort_key(b));
        match self {
            EnergyBand::Low => ka.total_cmp(&kb),
            EnergyBand::High | EnergyBand::Medium => kb.total_cmp(&ka),
        }
    }
}
