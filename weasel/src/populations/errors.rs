use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub(crate) enum EvolutionError {
    EmptyPopulation,
}

impl fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPopulation => write!(f, "attempted evolution of an empty population"),
        }
    }
}

impl Error for EvolutionError {}
