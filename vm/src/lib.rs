//! Simulador de memória virtual paginada sob demanda.
//!
//! Reproduz um trace de acessos sobre um número fixo de quadros físicos e
//! conta faltas de página e escritas de páginas sujas despejadas, para uma
//! das políticas de substituição em [`page_replacer`].

pub mod address;
pub mod config;
pub mod error;
pub mod frame_table;
pub mod mmu;
pub mod page_replacer;
pub mod stats;

pub use address::{AccessRecord, Operation};
pub use config::SimConfig;
pub use error::{Error, Result};
pub use mmu::{AccessOutcome, Mmu};
pub use page_replacer::{Algorithm, PageReplacer, Replacer};
pub use stats::SimulationStats;

/// Roda uma simulação completa, do primeiro ao último acesso.
pub fn simulate<I>(
    config: SimConfig,
    algorithm: Algorithm,
    seed: Option<u64>,
    records: I,
) -> Result<SimulationStats>
where
    I: IntoIterator<Item = AccessRecord>,
{
    let mut mmu = Mmu::new(config, algorithm.replacer(seed))?;

    Ok(mmu.run(records))
}
