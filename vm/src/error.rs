use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tamanho de página não pode ser zero")]
    ZeroPageSize,

    #[error("tamanho de página {0} não é potência de 2")]
    PageSizeNotPowerOfTwo(u64),

    #[error("tamanho da memória {memory_size} não é múltiplo do tamanho de página {page_size}")]
    MemoryNotPageAligned { memory_size: u64, page_size: u64 },

    #[error("memória de {memory_size} não comporta nenhuma página de {page_size}")]
    NoFrames { memory_size: u64, page_size: u64 },

    #[error("{0} quadros não cabem no espaço de endereçamento desta máquina")]
    TooManyFrames(u64),

    #[error("falha ao alocar {frame_count} quadros: {source}")]
    FrameAllocation {
        frame_count: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
