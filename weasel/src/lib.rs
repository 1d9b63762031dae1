//! An educational simulation of hill-climbing evolutionary search,
//! after Dawkins' weasel program: a population of random strings is
//! evolved toward a fixed target by mutating the current best member
//! and keeping the best of its offspring, generation after generation.
//!
//! The algorithm is deliberately fixed. There is no crossover and no
//! pluggable selection strategy: every generation mutates the single
//! previous elite into a full set of siblings and promotes the fittest
//! of them. The interesting knobs are the population size and the
//! per-character mutation rate.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a
//! run can be made deterministic by seeding.
//!
//! # Example usage: evolving a string towards "WEASEL"
//! ```
//! use rand::thread_rng;
//! use weasel::logging::ReportingLevel;
//! use weasel::Simulation;
//!
//! let mut rng = thread_rng();
//! let mut simulation = Simulation::new(ReportingLevel::EliteOnly);
//! simulation.start("weasel", 50, 5.0, &mut rng);
//!
//! while simulation.is_running() {
//!     if let Err(e) = simulation.tick(&mut rng) {
//!         eprintln!("{}", e);
//!         break;
//!     }
//! }
//!
//! assert_eq!(simulation.best_candidate(), "WEASEL");
//! ```

mod genetics;
mod populations;
mod simulation;

pub use genetics::*;
pub use populations::*;
pub use simulation::*;
