use crate::{
    address,
    error::{Error, Result},
};

/// Parâmetros de uma simulação, já validados.
///
/// Os dois tamanhos estão na mesma unidade (bytes, KB, ...), escolhida por
/// quem chama; nada aqui converte unidades.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    page_size: u64,
    memory_size: u64,
    offset_bits: u32,
    frame_count: usize,
}

impl SimConfig {
    pub fn new(page_size: u64, memory_size: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::ZeroPageSize);
        }

        if !page_size.is_power_of_two() {
            return Err(Error::PageSizeNotPowerOfTwo(page_size));
        }

        let frames = memory_size / page_size;

        if frames == 0 {
            return Err(Error::NoFrames { memory_size, page_size });
        }

        if memory_size % page_size != 0 {
            return Err(Error::MemoryNotPageAligned { memory_size, page_size });
        }

        let frame_count = usize::try_from(frames).map_err(|_| Error::TooManyFrames(frames))?;

        Ok(SimConfig {
            page_size,
            memory_size,
            offset_bits: address::offset_bits(page_size),
            frame_count,
        })
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn memory_size(&self) -> u64 {
        self.memory_size
    }

    pub fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let config = SimConfig::new(4, 16).unwrap();

        assert_eq!(config.frame_count(), 4);
        assert_eq!(config.offset_bits(), 2);
        assert_eq!(config.page_size(), 4);
        assert_eq!(config.memory_size(), 16);
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(matches!(SimConfig::new(0, 16), Err(Error::ZeroPageSize)));
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert!(matches!(
            SimConfig::new(3, 12),
            Err(Error::PageSizeNotPowerOfTwo(3))
        ));
    }

    #[test]
    fn rejects_uneven_memory() {
        assert!(matches!(
            SimConfig::new(4, 18),
            Err(Error::MemoryNotPageAligned { memory_size: 18, page_size: 4 })
        ));
    }

    #[test]
    fn frame_count_fits_usize() {
        let config = SimConfig::new(1, 1 << 20).unwrap();

        assert_eq!(config.frame_count(), 1 << 20);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn rejects_frame_count_wider_than_usize() {
        assert!(matches!(
            SimConfig::new(1, 1 << 40),
            Err(Error::TooManyFrames(frames)) if frames == 1 << 40
        ));
    }

    #[test]
    fn rejects_memory_smaller_than_page() {
        assert!(matches!(
            SimConfig::new(8, 4),
            Err(Error::NoFrames { .. })
        ));
    }
}
