use dense_mlp::logging::setup_logging;
use dense_mlp::{ActivationFunction, Network, SeededRandom, TrainConfig};

fn main() -> dense_mlp::Result<()> {
    setup_logging("debug");

    let mut rng = SeededRandom::from_seed(2024);
    let mut network = Network::with_random_source(
        2,
        1,
        2,
        1,
        ActivationFunction::Relu,
        ActivationFunction::Relu,
        &mut rng,
    )?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let expected_outputs = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];
    network.add_training_data(&inputs, &expected_outputs);

    let config = TrainConfig::new(50_000, 0.01).with_log_interval(5_000);
    match network.train_with(&config)? {
        Some(stats) => println!("Finished: {stats}"),
        None => {
            println!("Failed to train the network!");
            return Ok(());
        }
    }

    network.print_results(&mut std::io::stdout())?;
    Ok(())
}
