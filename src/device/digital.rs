/// Edge of a digital signal to watch for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Released to pressed.
    Rising,
    /// Pressed to released.
    Falling,
    Both,
}

/// A boolean input line, e.g. a push button.
pub trait DigitalInput {
    /// Samples the line and reports whether it is in its active state.
    fn is_pressed(&mut self) -> bool;

    /// Samples the line and reports whether `edge` occurred since the previous sample.
    fn is_event_detected(&mut self, edge: Edge) -> bool;
}

/// A boolean output line, e.g. an LED.
pub trait DigitalOutput {
    fn write(&mut self, value: bool);

    fn is_enabled(&self) -> bool;

    fn toggle(&mut self) {
        let value = !self.is_enabled();
        self.write(value);
    }
}
