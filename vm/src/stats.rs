/// Contadores de uma simulação. Só crescem.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct SimulationStats {
    pub access_count: u64,
    pub fault_count: u64,
    pub writeback_count: u64,
}

impl SimulationStats {
    pub fn hits(&self) -> u64 {
        self.access_count - self.fault_count
    }

    pub fn fault_rate(&self) -> f64 {
        if self.access_count == 0 {
            return 0.0;
        }

        self.fault_count as f64 / self.access_count as f64
    }
}
