use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vmsim")]
#[command(about = "Simula paginação sob demanda sobre um trace de acessos à memória")]
#[command(version)]
pub struct Cli {
    /// Política de substituição: fifo, lru, 2a ou random (outro nome vira random)
    pub algorithm: String,

    /// Arquivo de trace, uma linha `<endereço hex> <R|W>` por acesso
    pub trace_file: PathBuf,

    /// Tamanho de cada página (potência de 2)
    pub page_size: u64,

    /// Tamanho da memória física, na mesma unidade da página
    pub memory_size: u64,

    /// Semente para a política random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Roda as quatro políticas sobre o mesmo trace, ignorando `algorithm`
    #[arg(long)]
    pub all: bool,
}
