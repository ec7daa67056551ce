//! Tradução de endereços e os registros de acesso vindos do trace.

/// Tipo de acesso à memória.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl Operation {
    pub fn is_write(self) -> bool {
        self == Operation::Write
    }
}

/// Um acesso do trace: endereço + operação.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AccessRecord {
    pub address: u64,
    pub operation: Operation,
}

impl AccessRecord {
    pub fn read(address: u64) -> Self {
        AccessRecord { address, operation: Operation::Read }
    }

    pub fn write(address: u64) -> Self {
        AccessRecord { address, operation: Operation::Write }
    }
}

/// Quantos bits baixos do endereço formam o offset dentro da página.
///
/// Divide `page_size` por 2 até chegar em 1. Só faz sentido para potências
/// de 2; quem chama valida antes (ver [`crate::config::SimConfig`]).
pub fn offset_bits(page_size: u64) -> u32 {
    let mut page_size = page_size;
    let mut bits = 0;

    while page_size > 1 {
        page_size >>= 1;
        bits += 1;
    }

    bits
}

pub fn page_number(address: u64, offset_bits: u32) -> u64 {
    address >> offset_bits
}
