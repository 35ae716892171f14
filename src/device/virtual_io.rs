use std::cell::Cell;
use std::rc::Rc;

use crate::device::digital::{DigitalInput, DigitalOutput, Edge};

/// Raw level of a simulated line, shared between the device and whoever drives it.
#[derive(Debug, Clone, Default)]
pub struct VirtualLine {
    level: Rc<Cell<bool>>,
}

impl VirtualLine {
    pub fn new(level: bool) -> VirtualLine {
        VirtualLine { level: Rc::new(Cell::new(level)) }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }

    pub fn get(&self) -> bool {
        self.level.get()
    }
}

/// Button reading a `VirtualLine`.
///
/// With `active_high == false` a low line counts as pressed.
#[derive(Debug, Clone)]
pub struct VirtualButton {
    line: VirtualLine,
    active_high: bool,
    last_pressed: bool,
}

impl VirtualButton {
    pub fn new(line: VirtualLine, active_high: bool) -> VirtualButton {
        VirtualButton {
            line,
            active_high,
            last_pressed: false,
        }
    }

    pub fn line(&self) -> &VirtualLine {
        &self.line
    }

    fn sample(&self) -> bool {
        self.line.get() == self.active_high
    }
}

impl DigitalInput for VirtualButton {
    fn is_pressed(&mut self) -> bool {
        self.last_pressed = self.sample();
        self.last_pressed
    }

    fn is_event_detected(&mut self, edge: Edge) -> bool {
        let previous = self.last_pressed;
        let current = self.is_pressed();
        match edge {
            Edge::Rising => !previous && current,
            Edge::Falling => previous && !current,
            Edge::Both => previous != current,
        }
    }
}

/// LED that records the last value written to it.
#[derive(Debug, Clone, Default)]
pub struct VirtualLed {
    enabled: bool,
    writes: usize,
}

impl VirtualLed {
    pub fn new(start_value: bool) -> VirtualLed {
        VirtualLed { enabled: start_value, writes: 0 }
    }

    /// Number of `write` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DigitalOutput for VirtualLed {
    fn write(&mut self, value: bool) {
        self.enabled = value;
        self.writes += 1;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
