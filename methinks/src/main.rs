use weasel::logging::ReportingLevel;
use weasel::{PopulationConfig, Simulation};

use std::env;
use std::thread;
use std::time::Duration;

const DEFAULT_TARGET: &str = "METHINKS IT IS LIKE A WEASEL";
const GENERATION_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    let args: Vec<String> = env::args().collect();
    let defaults = PopulationConfig::classic();
    let target = args.get(1).map(String::as_str).unwrap_or(DEFAULT_TARGET);
    let pop_size = args
        .get(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(defaults.size);
    let mutation_rate = args
        .get(3)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(defaults.mutation_rate);

    let mut rng = rand::thread_rng();
    let mut simulation = Simulation::new(ReportingLevel::NoCandidates);
    simulation.start(target, pop_size, mutation_rate, &mut rng);

    let mut converged = false;
    while simulation.is_running() {
        thread::sleep(GENERATION_INTERVAL);
        match simulation.tick(&mut rng) {
            Ok(Some(report)) => {
                println!(
                    "gen. {}  best {}  best fit {}  stepbacks {}",
                    report.generation,
                    simulation.best_candidate(),
                    simulation.best_fitness(),
                    simulation.stepbacks(),
                );
                converged = report.converged;
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    if converged {
        println!(
            "matched {:?} after {} generations with {} stepbacks",
            simulation.best_candidate(),
            simulation.generation(),
            simulation.stepbacks(),
        );
    }
    if let Some(log) = simulation.logs().last() {
        println!("final generation fitness {:?}", log.fitness);
    }
}
