use std::fmt;

use vm::{Algorithm, SimConfig, SimulationStats};

/// Relatório final de uma simulação, nas mesmas unidades da linha de comando.
#[derive(Clone, Debug)]
pub struct Report {
    pub memory_size: u64,
    pub page_size: u64,
    pub algorithm: Algorithm,
    /// Nome da técnica como aparece no relatório. Por padrão o nome da
    /// política; na linha de comando, o que o usuário digitou.
    pub policy_name: String,
    pub stats: SimulationStats,
}

impl Report {
    pub fn new(config: SimConfig, algorithm: Algorithm, stats: SimulationStats) -> Self {
        Report {
            memory_size: config.memory_size(),
            page_size: config.page_size(),
            algorithm,
            policy_name: algorithm.name().to_owned(),
            stats,
        }
    }

    pub fn with_policy_name(mut self, name: &str) -> Self {
        self.policy_name = name.to_owned();
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tamanho da memória: {}", self.memory_size)?;
        writeln!(f, "Tamanho das páginas: {}", self.page_size)?;
        writeln!(f, "Técnica de reposição: {}", self.policy_name)?;
        writeln!(f, "Acessos à memória: {}", self.stats.access_count)?;
        writeln!(f, "Page faults: {}", self.stats.fault_count)?;
        writeln!(f, "Páginas escritas: {}", self.stats.writeback_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_lines() {
        let report = Report::new(
            SimConfig::new(4, 128).unwrap(),
            Algorithm::SecondChance,
            SimulationStats {
                access_count: 10,
                fault_count: 6,
                writeback_count: 2,
            },
        );

        assert_eq!(
            report.to_string(),
            "Tamanho da memória: 128\n\
             Tamanho das páginas: 4\n\
             Técnica de reposição: 2a\n\
             Acessos à memória: 10\n\
             Page faults: 6\n\
             Páginas escritas: 2\n"
        );
    }

    #[test]
    fn keeps_typed_policy_name() {
        let report = Report::new(
            SimConfig::new(4, 16).unwrap(),
            Algorithm::from_name("otimo"),
            SimulationStats::default(),
        )
        .with_policy_name("otimo");

        assert_eq!(report.algorithm, Algorithm::Random);
        assert!(report.to_string().contains("Técnica de reposição: otimo\n"));
    }
}
