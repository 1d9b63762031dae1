//! A population is an ordered collection of candidate strings evolved
//! toward a target. Each generation mutates the current elite into a
//! full set of sibling offspring and promotes the fittest of them
//! back into the elite slot.
mod config;
mod errors;
pub mod logging;

pub use config::PopulationConfig;
use errors::EvolutionError;

use crate::genetics;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A population of candidate strings, together with its target and
/// the mutation rate applied each generation.
///
/// After every completed [`evolve`] step, index 0 holds the fittest
/// member found in that step (the elite). The member list is replaced
/// wholesale each generation; individual candidates are never
/// modified in place.
///
/// [`evolve`]: Population::evolve
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Population {
    members: Vec<String>,
    target: String,
    generation: usize,
    config: PopulationConfig,
}

impl Population {
    /// Creates a population of `config.size` uniformly random
    /// members, each as long as `target`.
    ///
    /// # Examples
    /// ```
    /// use rand::thread_rng;
    /// use weasel::{Population, PopulationConfig};
    ///
    /// let mut rng = thread_rng();
    /// let population = Population::new(
    ///     "METHINKS",
    ///     PopulationConfig {
    ///         size: 20,
    ///         mutation_rate: 5.0,
    ///     },
    ///     &mut rng,
    /// );
    ///
    /// assert_eq!(population.len(), 20);
    /// assert!(population.members().all(|m| m.chars().count() == 8));
    /// ```
    pub fn new<R: Rng>(target: &str, config: PopulationConfig, rng: &mut R) -> Population {
        let length = target.chars().count();
        Population {
            members: (0..config.size)
                .map(|_| genetics::random_string(length, rng))
                .collect(),
            target: target.to_string(),
            generation: 0,
            config,
        }
    }

    /// Adopts an existing member list verbatim as generation zero,
    /// for callers that build their own starting candidates. The
    /// population size is the length of the list.
    ///
    /// # Examples
    /// ```
    /// use rand::thread_rng;
    /// use weasel::Population;
    ///
    /// let mut rng = thread_rng();
    /// let mut population =
    ///     Population::from_members(vec!["AXC".into(), "ABC".into()], "ABC", 0.0);
    ///
    /// assert_eq!(population.elite(), "AXC");
    /// // With a mutation rate of 0 every offspring copies the elite.
    /// assert_eq!(population.evolve(&mut rng).unwrap(), 2);
    /// ```
    pub fn from_members(members: Vec<String>, target: &str, mutation_rate: f32) -> Population {
        Population {
            config: PopulationConfig {
                size: members.len(),
                mutation_rate,
            },
            members,
            target: target.to_string(),
            generation: 0,
        }
    }

    /// Advances the population one generation and returns the best
    /// fitness found in it.
    ///
    /// Every offspring is mutated from the current elite at index 0,
    /// never from the other members. The fittest offspring is then
    /// swapped into index 0, earlier offspring winning ties.
    ///
    /// # Errors
    /// Returns an error if the population has no members.
    ///
    /// # Examples
    /// ```
    /// use rand::thread_rng;
    /// use weasel::{fitness, Population, PopulationConfig};
    ///
    /// let mut rng = thread_rng();
    /// let mut population = Population::new(
    ///     "WEASEL",
    ///     PopulationConfig {
    ///         size: 30,
    ///         mutation_rate: 5.0,
    ///     },
    ///     &mut rng,
    /// );
    ///
    /// let best = population.evolve(&mut rng).unwrap();
    /// assert_eq!(fitness(population.elite(), population.target()), best);
    /// ```
    pub fn evolve<R: Rng>(&mut self, rng: &mut R) -> Result<usize, Box<dyn std::error::Error>> {
        if self.members.is_empty() {
            return Err(EvolutionError::EmptyPopulation.into());
        }
        let mut offspring: Vec<String> = (0..self.members.len())
            .map(|_| genetics::mutate(&self.members[0], self.config.mutation_rate, rng))
            .collect();
        let (best_index, best_fitness) = best_of(&offspring, &self.target);
        offspring.swap(0, best_index);
        self.members = offspring;
        self.generation += 1;
        Ok(best_fitness)
    }

    /// Returns the elite: the member at index 0, which after every
    /// completed evolve-step is the fittest of its generation.
    pub fn elite(&self) -> &str {
        self.members.first().expect("empty population has no elite")
    }

    /// Returns an iterator over all current members, elite first.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Returns an iterator over each member's fitness against the
    /// target, in member order. Fitness is recomputed on demand and
    /// never cached.
    pub fn fitnesses(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .map(move |member| genetics::fitness(member, &self.target))
    }

    /// Returns the target string the population evolves toward.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the number of completed evolve-steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Index and fitness of the fittest member. The scan runs left to
/// right from index 1 with index 0 as the initial candidate and only
/// a strict improvement displaces it, so the lowest index wins ties.
fn best_of(members: &[String], target: &str) -> (usize, usize) {
    let mut best_index = 0;
    let mut best_fitness = genetics::fitness(&members[0], target);
    for (index, member) in members.iter().enumerate().skip(1) {
        let fitness = genetics::fitness(member, target);
        if fitness > best_fitness {
            best_index = index;
            best_fitness = fitness;
        }
    }
    (best_index, best_fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(members: &[&str]) -> Vec<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn initial_members_match_the_target_length() {
        let mut rng = StdRng::seed_from_u64(29);
        let population = Population::new(
            "ABCDEFGHIJ",
            PopulationConfig {
                size: 5,
                mutation_rate: 5.0,
            },
            &mut rng,
        );
        assert_eq!(population.len(), 5);
        assert!(population.members().all(|m| m.chars().count() == 10));
    }

    #[test]
    fn evolving_preserves_the_population_size() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut population = Population::new(
            "METHINKS",
            PopulationConfig {
                size: 40,
                mutation_rate: 10.0,
            },
            &mut rng,
        );
        for generation in 1..=10 {
            population.evolve(&mut rng).unwrap();
            assert_eq!(population.len(), 40);
            assert_eq!(population.generation(), generation);
        }
    }

    #[test]
    fn the_elite_holds_the_best_fitness_of_its_generation() {
        let mut rng = StdRng::seed_from_u64(37);
        let mut population = Population::new(
            "METHINKS IT IS",
            PopulationConfig {
                size: 25,
                mutation_rate: 20.0,
            },
            &mut rng,
        );
        for _ in 0..10 {
            let best = population.evolve(&mut rng).unwrap();
            assert_eq!(genetics::fitness(population.elite(), population.target()), best);
            assert_eq!(population.fitnesses().max().unwrap(), best);
        }
    }

    #[test]
    fn the_selection_scan_prefers_the_lowest_index_on_ties() {
        let members = strings(&["AXX", "ABX", "AXC"]);
        assert_eq!(best_of(&members, "ABC"), (1, 2));

        let members = strings(&["XXX", "ABX", "AXC", "ABC"]);
        assert_eq!(best_of(&members, "ABC"), (3, 3));

        let members = strings(&["ABC", "ABC", "ABC"]);
        assert_eq!(best_of(&members, "ABC"), (0, 3));
    }

    #[test]
    fn offspring_descend_only_from_the_elite() {
        // With a mutation rate of 0, every generation is a perfect
        // copy of the previous elite. The fitter member at index 1
        // never contributes, so its extra match is lost forever.
        let mut rng = StdRng::seed_from_u64(41);
        let mut population = Population::from_members(strings(&["AXC", "ABC"]), "ABC", 0.0);
        for _ in 0..20 {
            assert_eq!(population.evolve(&mut rng).unwrap(), 2);
            assert!(population.members().all(|m| m == "AXC"));
        }
    }

    #[test]
    fn empty_populations_cannot_evolve() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut population = Population::from_members(vec![], "ABC", 5.0);
        let error = population.evolve(&mut rng).unwrap_err();
        assert!(error.to_string().contains("empty population"));
    }

    #[test]
    fn populations_survive_a_serde_round_trip() {
        let mut rng = StdRng::seed_from_u64(47);
        let mut population = Population::new(
            "WEASEL",
            PopulationConfig {
                size: 15,
                mutation_rate: 5.0,
            },
            &mut rng,
        );
        population.evolve(&mut rng).unwrap();

        let serialized = serde_json::to_string(&population).unwrap();
        let mut restored: Population = serde_json::from_str(&serialized).unwrap();

        assert_eq!(restored.target(), "WEASEL");
        assert_eq!(restored.len(), 15);
        assert_eq!(restored.generation(), 1);
        restored.evolve(&mut rng).unwrap();
        assert_eq!(restored.generation(), 2);
    }
}
