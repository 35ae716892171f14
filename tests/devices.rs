use dense_mlp::device::{run_cycle, DigitalOutput, VirtualButton, VirtualLed, VirtualLine};
use dense_mlp::{ActivationFunction, Network, SeededRandom};

#[test]
fn cycle_writes_prediction_threshold_to_output() {
    let mut rng = SeededRandom::from_seed(12);
    let mut network = Network::with_random_source(
        3,
        1,
        3,
        1,
        ActivationFunction::Relu,
        ActivationFunction::Relu,
        &mut rng,
    )
    .unwrap();

    let lines: Vec<VirtualLine> = (0..3).map(|_| VirtualLine::new(false)).collect();
    let mut buttons: Vec<VirtualButton> =
        lines.iter().map(|l| VirtualButton::new(l.clone(), true)).collect();
    let mut led = VirtualLed::new(false);

    lines[0].set(true);
    lines[2].set(true);
    let enabled = run_cycle(&mut network, &mut buttons, &mut led).unwrap();

    let expected = network.predict(&[1.0, 0.0, 1.0]).unwrap()[0] >= 0.5;
    assert_eq!(enabled, expected);
    assert_eq!(led.is_enabled(), expected);
    assert_eq!(led.write_count(), 1);
}
