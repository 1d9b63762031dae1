use serde::{Deserialize, Serialize};

/// Configuration data for population generation and evolution.
///
/// # Note
/// `mutation_rate` is a percentage and should be in the range
/// [0.0, 100.0]. Values outside this bound are accepted and computed
/// literally: a negative rate never mutates, and a rate of 100 or
/// more redraws every position.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of members in the population, constant for a run.
    pub size: usize,
    /// Per-character chance of mutation, in percent.
    pub mutation_rate: f32,
}

impl PopulationConfig {
    /// Returns the configuration of the classic weasel demonstration:
    /// 100 members with a 5% per-character mutation rate.
    ///
    /// # Examples
    /// ```
    /// use weasel::PopulationConfig;
    ///
    /// let config = PopulationConfig {
    ///     mutation_rate: 2.5,
    ///     ..PopulationConfig::classic()
    /// };
    ///
    /// assert_eq!(config.size, 100);
    /// ```
    pub const fn classic() -> PopulationConfig {
        PopulationConfig {
            size: 100,
            mutation_rate: 5.0,
        }
    }
}
