//! Generation-by-generation records of an evolving population.
//!
//! Each snapshot keeps the fitness distribution of the whole
//! generation, suitable for charting a run over time, and optionally
//! clones some or all of the candidates themselves.
use super::Population;

use std::fmt;

/// Defines how much of each generation is copied into the log.
#[derive(Clone, Copy, Debug)]
pub enum ReportingLevel {
    /// Clones every candidate of the generation.
    AllCandidates,
    /// Clones only the generation's elite.
    EliteOnly,
    /// Clones no candidates.
    NoCandidates,
}

/// A snapshot of one generation.
#[derive(Clone, Debug)]
pub struct Log {
    pub generation_number: usize,
    pub best_fitness: usize,
    pub fitness: Stats,
    pub generation_sample: GenerationMemberRecord,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tbest_fitness: {:?}\n\
            \tfitness: {:?}\n\
            }}",
            &self.generation_number, &self.best_fitness, &self.fitness,
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug)]
pub struct Stats {
    pub maximum: f32,
    pub minimum: f32,
    pub mean: f32,
    pub median: f32,
}

impl Stats {
    /// Returns statistics about numbers in a non-empty sequence.
    ///
    /// # Examples
    /// ```
    /// use weasel::logging::Stats;
    ///
    /// let stats = Stats::from([3.0, 1.0, 4.0, 1.0, 5.0].iter().copied());
    /// assert_eq!(stats.maximum, 5.0);
    /// assert_eq!(stats.minimum, 1.0);
    /// assert_eq!(stats.mean, 2.8);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn from(data: impl Iterator<Item = f32>) -> Stats {
        let mut data: Vec<f32> = data.collect();
        data.sort_unstable_by(|a, b| {
            a.partial_cmp(b)
                .unwrap_or_else(|| panic!("uncomparable value detected (NaN)"))
        });
        let sum: f32 = data.iter().copied().sum();
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: sum / data.len() as f32,
            median,
        }
    }
}

/// A reporting-level dependant store of candidates from a generation.
#[derive(Clone, Debug)]
pub enum GenerationMemberRecord {
    /// Every candidate of the generation, elite first.
    All(Vec<String>),
    /// Only the generation's elite.
    Elite(String),
    /// Empty.
    None,
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    logs: Vec<Log>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    ///
    /// # Examples
    /// ```
    /// use weasel::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::NoCandidates);
    /// ```
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Stores a snapshot of a population.
    ///
    /// # Examples
    /// ```
    /// use rand::thread_rng;
    /// use weasel::logging::{EvolutionLogger, ReportingLevel};
    /// use weasel::{Population, PopulationConfig};
    ///
    /// let mut rng = thread_rng();
    /// let mut logger = EvolutionLogger::new(ReportingLevel::EliteOnly);
    /// let mut population = Population::new(
    ///     "WEASEL",
    ///     PopulationConfig {
    ///         size: 10,
    ///         mutation_rate: 5.0,
    ///     },
    ///     &mut rng,
    /// );
    ///
    /// population.evolve(&mut rng).unwrap();
    /// logger.log(&population);
    ///
    /// assert_eq!(logger.iter().count(), 1);
    /// ```
    pub fn log(&mut self, population: &Population) {
        let fitnesses: Vec<usize> = population.fitnesses().collect();
        self.logs.push(Log {
            generation_number: population.generation(),
            best_fitness: fitnesses.iter().copied().max().unwrap_or(0),
            fitness: Stats::from(fitnesses.iter().map(|&f| f as f32)),
            generation_sample: match self.reporting_level {
                ReportingLevel::AllCandidates => GenerationMemberRecord::All(
                    population.members().map(String::from).collect(),
                ),
                ReportingLevel::EliteOnly => {
                    GenerationMemberRecord::Elite(population.elite().to_string())
                }
                ReportingLevel::NoCandidates => GenerationMemberRecord::None,
            },
        })
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }

    /// Returns the logger's reporting level.
    pub fn reporting_level(&self) -> ReportingLevel {
        self.reporting_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::populations::PopulationConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stats_cover_odd_and_even_length_sequences() {
        let odd = Stats::from([2.0, 9.0, 4.0].iter().copied());
        assert_eq!(odd.maximum, 9.0);
        assert_eq!(odd.minimum, 2.0);
        assert_eq!(odd.mean, 5.0);
        assert_eq!(odd.median, 4.0);

        let even = Stats::from([1.0, 2.0, 3.0, 4.0].iter().copied());
        assert_eq!(even.maximum, 4.0);
        assert_eq!(even.minimum, 1.0);
        assert_eq!(even.mean, 2.5);
        assert_eq!(even.median, 2.5);
    }

    #[test]
    fn loggers_record_one_snapshot_per_generation() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut logger = EvolutionLogger::new(ReportingLevel::AllCandidates);
        let mut population = Population::new(
            "METHINKS",
            PopulationConfig {
                size: 12,
                mutation_rate: 10.0,
            },
            &mut rng,
        );

        for generation in 1..=5 {
            let best = population.evolve(&mut rng).unwrap();
            logger.log(&population);

            let log = logger.iter().last().unwrap();
            assert_eq!(log.generation_number, generation);
            assert_eq!(log.best_fitness, best);
            assert_eq!(log.fitness.maximum, best as f32);
            match &log.generation_sample {
                GenerationMemberRecord::All(candidates) => assert_eq!(candidates.len(), 12),
                record => panic!("unexpected sample record: {:?}", record),
            }
        }
        assert_eq!(logger.iter().count(), 5);
    }
}
