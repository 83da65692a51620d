use std::sync::Arc;

use evobits::{
    EngineConfig, EvolutionRunner, GeneticError, Genome, Population, RandomNumberGenerator,
};

fn ones_scorer() -> Arc<dyn evobits::FitnessFunction> {
    Arc::new(|genome: &Genome| genome.count_ones() as f64)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_count_ones_converges_to_all_ones() {
    init_tracing();
    let mut rng = RandomNumberGenerator::from_seed(0);
    let config = EngineConfig::builder()
        .max_population_size(20)
        .mutation_probability(1.0)
        .build();

    let population = Population::new(10, ones_scorer(), 4, config, &mut rng).unwrap();
    let mut runner = EvolutionRunner::new(population);
    let result = runner.run(50, &mut rng).unwrap();

    assert_eq!(result.best.fitness(), 4.0);
    assert_eq!(result.best.genome().to_string(), "1111");

    // The best fitness never regresses below any previously observed value.
    let mut previous = f64::NEG_INFINITY;
    for stats in &result.history {
        assert!(stats.best_fitness >= previous);
        previous = stats.best_fitness;
    }
}

#[test]
fn test_genome_length_is_invariant_across_generations() {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let config = EngineConfig::builder().max_population_size(30).build();
    let mut population = Population::new(12, ones_scorer(), 16, config, &mut rng).unwrap();

    for _ in 0..25 {
        population.advance_generation(&mut rng).unwrap();
        for individual in population.individuals() {
            assert_eq!(individual.genome().len(), 16);
        }
    }
}

#[test]
fn test_population_size_stays_within_configured_bounds() {
    let mut rng = RandomNumberGenerator::from_seed(2);
    let config = EngineConfig::builder().max_population_size(8).build();
    let mut population = Population::new(8, ones_scorer(), 10, config, &mut rng).unwrap();

    for _ in 0..40 {
        population.advance_generation(&mut rng).unwrap();
        assert!(population.size() >= 1);
        assert!(population.size() <= 8);
    }
}

#[test]
fn test_selection_with_one_dominant_individual() {
    let mut rng = RandomNumberGenerator::from_seed(3);
    // All-ones genomes dominate the selection weights by six orders of
    // magnitude; everything else scores zero and survives only on epsilon.
    let dominant: Arc<dyn evobits::FitnessFunction> = Arc::new(|genome: &Genome| {
        if genome.count_ones() == genome.len() {
            1e6
        } else {
            0.0
        }
    });
    let config = EngineConfig::builder()
        .max_population_size(40)
        .random_one_probability(0.9)
        .build();
    let population = Population::new(30, dominant, 4, config, &mut rng).unwrap();

    let members: Vec<u64> = population.individuals().iter().map(|i| i.id()).collect();
    for _ in 0..2000 {
        let (first, second) = population.select_parents(&mut rng).unwrap();
        assert!(members.contains(&first.id()));
        assert!(members.contains(&second.id()));
    }
}

#[test]
fn test_zero_initial_size_is_rejected() {
    let mut rng = RandomNumberGenerator::from_seed(4);
    let result = Population::new(0, ones_scorer(), 4, EngineConfig::default(), &mut rng);
    assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
}

#[test]
fn test_invalid_configuration_is_rejected_at_construction() {
    let mut rng = RandomNumberGenerator::from_seed(4);
    let config = EngineConfig::new(0.5, 0.01, 0.5, 100, -1.0);
    let result = Population::new(10, ones_scorer(), 4, config, &mut rng);
    match result {
        Err(GeneticError::Configuration(message)) => {
            assert!(message.contains("epsilon"));
        }
        other => panic!("expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_fixed_seed_runs_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let config = EngineConfig::builder().max_population_size(20).build();
        let population = Population::new(10, ones_scorer(), 8, config, &mut rng).unwrap();
        let mut runner = EvolutionRunner::new(population);
        let result = runner.run(20, &mut rng).unwrap();
        (
            result.best.genome().to_string(),
            result
                .history
                .iter()
                .map(|stats| stats.best_fitness)
                .collect::<Vec<f64>>(),
        )
    };

    assert_eq!(run(99), run(99));
}
