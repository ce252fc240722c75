//! Engine stub replaying fixed uniforms, for exercising rare branches.

use variate_core::BitEngine;

pub(crate) struct Replay {
    values: Vec<f64>,
    /// Number of uniforms handed out so far.
    pub(crate) next: usize,
}

impl Replay {
    /// Cycles through `values` forever.
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl BitEngine for Replay {
    fn set_seed(&mut self, _seed: u32) {
        self.next = 0;
    }
    fn seed(&self) -> u32 {
        0
    }
    fn name(&self) -> &'static str {
        "replay"
    }
    fn next_word(&mut self) -> u32 {
        (self.next_uniform() * 4_294_967_296.0) as u32
    }
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
