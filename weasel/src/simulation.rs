//! The run controller: owns a population plus the cross-generation
//! bookkeeping (generation count, global best, stepbacks) and
//! advances one generation per tick.
//!
//! The controller has no timer of its own. Whatever calls [`tick`]
//! supplies the cadence, whether that is a wall-clock sleep between
//! calls or a plain loop in a test, so ticks are sequential by
//! construction and cancellation is just not calling again.
//!
//! [`tick`]: Simulation::tick

use crate::populations::logging::{EvolutionLogger, Log, ReportingLevel};
use crate::populations::{Population, PopulationConfig};

use rand::Rng;

use std::error::Error;

/// Per-tick summary of the generation just evolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// One-based generation number.
    pub generation: usize,
    /// Best fitness found in this generation.
    pub best_fitness: usize,
    /// Whether this generation scored strictly below the previous one.
    pub stepback: bool,
    /// Whether the best candidate now equals the target.
    pub converged: bool,
}

/// A simulation drives repeated evolve-steps over one population and
/// tracks the best candidate seen across all generations of a run.
///
/// Lifecycle: `new → start → (tick)* → stop`. Starting while already
/// running is a no-op, as is stopping while idle; a tick while idle
/// does nothing and reports `None`. A run also stops itself when the
/// best candidate equals the target exactly.
///
/// # Examples
/// ```
/// use rand::thread_rng;
/// use weasel::logging::ReportingLevel;
/// use weasel::Simulation;
///
/// let mut rng = thread_rng();
/// let mut simulation = Simulation::new(ReportingLevel::NoCandidates);
///
/// simulation.start("weasel", 50, 5.0, &mut rng);
/// while simulation.is_running() {
///     simulation.tick(&mut rng).unwrap();
/// }
///
/// assert_eq!(simulation.best_candidate(), "WEASEL");
/// ```
pub struct Simulation {
    population: Option<Population>,
    generation: usize,
    best_candidate: String,
    best_fitness: usize,
    previous_generation_best: usize,
    stepbacks: usize,
    running: bool,
    logger: EvolutionLogger,
}

impl Simulation {
    /// Creates an idle simulation. `reporting_level` controls how much
    /// of each generation the run log clones.
    pub fn new(reporting_level: ReportingLevel) -> Simulation {
        Simulation {
            population: None,
            generation: 0,
            best_candidate: String::new(),
            best_fitness: 0,
            previous_generation_best: 0,
            stepbacks: 0,
            running: false,
            logger: EvolutionLogger::new(reporting_level),
        }
    }

    /// Starts a run: resets every counter and the run log, upper-cases
    /// the target, builds a fresh random population of `pop_size`
    /// members, and begins accepting ticks.
    ///
    /// Starting an already-running simulation is a no-op.
    pub fn start<R: Rng>(
        &mut self,
        target: &str,
        pop_size: usize,
        mutation_rate: f32,
        rng: &mut R,
    ) {
        if self.running {
            return;
        }
        self.generation = 0;
        self.best_candidate.clear();
        self.best_fitness = 0;
        self.previous_generation_best = 0;
        self.stepbacks = 0;
        self.logger = EvolutionLogger::new(self.logger.reporting_level());
        let target = target.to_uppercase();
        self.population = Some(Population::new(
            &target,
            PopulationConfig {
                size: pop_size,
                mutation_rate,
            },
            rng,
        ));
        self.running = true;
    }

    /// Advances the run one generation, updating the stepback counter
    /// and the global best, and logging the generation. Reports `None`
    /// without touching anything while idle.
    ///
    /// A generation counts as a stepback when its best fitness is
    /// strictly below the previous generation's; the first generation
    /// of a run never counts. The run stops itself once the best
    /// candidate equals the target.
    ///
    /// # Errors
    /// Fails if the population cannot evolve because it has no
    /// members; the run stays in its current state.
    pub fn tick<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<GenerationReport>, Box<dyn Error>> {
        if !self.running {
            return Ok(None);
        }
        let population = self
            .population
            .as_mut()
            .expect("running simulation has no population");

        let best_fitness = population.evolve(rng)?;
        self.generation += 1;

        let stepback = self.generation > 1 && best_fitness < self.previous_generation_best;
        if stepback {
            self.stepbacks += 1;
        }
        self.previous_generation_best = best_fitness;

        if best_fitness > self.best_fitness {
            self.best_fitness = best_fitness;
            self.best_candidate = population.elite().to_string();
        }

        self.logger.log(population);

        let converged = self.best_candidate == population.target();
        if converged {
            self.running = false;
        }

        Ok(Some(GenerationReport {
            generation: self.generation,
            best_fitness,
            stepback,
            converged,
        }))
    }

    /// Stops the run. Stopping an idle simulation is a no-op; either
    /// way no further ticks have any effect until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns whether the simulation is currently accepting ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the number of completed generations in the current run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the best candidate seen so far in the current run, or
    /// the empty string before the first improvement.
    pub fn best_candidate(&self) -> &str {
        &self.best_candidate
    }

    /// Returns the fitness of the best candidate seen so far.
    pub fn best_fitness(&self) -> usize {
        self.best_fitness
    }

    /// Returns how many generations scored strictly below their
    /// predecessor. Only mutation randomness can cause this, since
    /// selection itself is elitist.
    pub fn stepbacks(&self) -> usize {
        self.stepbacks
    }

    /// Returns the current population, if a run has been started.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Iterate over the per-generation snapshots of the current run.
    pub fn logs(&self) -> impl Iterator<Item = &Log> {
        self.logger.iter()
    }
}
