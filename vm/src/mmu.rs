use crate::{
    address::{self, AccessRecord},
    config::SimConfig,
    error::Result,
    frame_table::FrameTable,
    page_replacer::PageReplacer,
    stats::SimulationStats,
};

/// O que aconteceu num acesso.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    Hit {
        frame: usize,
    },
    Fault {
        frame: usize,
        /// Página que estava no quadro, se havia alguma.
        evicted: Option<u64>,
        written_back: bool,
    },
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }

    pub fn frame(&self) -> usize {
        match *self {
            AccessOutcome::Hit { frame } | AccessOutcome::Fault { frame, .. } => frame,
        }
    }
}

/// Motor da simulação: dono da tabela de quadros, da política e dos
/// contadores de uma execução. Os acessos precisam ser processados na ordem
/// do trace.
pub struct Mmu<REPLACER: PageReplacer> {
    offset_bits: u32,
    frames: FrameTable,
    replacer: REPLACER,
    stats: SimulationStats,
}

impl<REPLACER> Mmu<REPLACER>
where
    REPLACER: PageReplacer,
{
    pub fn new(config: SimConfig, replacer: REPLACER) -> Result<Self> {
        let frames = FrameTable::new(config.frame_count())?;

        log::debug!(
            "mmu: {} quadros, páginas de {} ({} bits de offset)",
            frames.len(),
            config.page_size(),
            config.offset_bits()
        );

        Ok(Mmu {
            offset_bits: config.offset_bits(),
            frames,
            replacer,
            stats: SimulationStats::default(),
        })
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn replacer(&self) -> &REPLACER {
        &self.replacer
    }

    fn handle_page_fault(&mut self, page_number: u64, record: AccessRecord, clock: u64) -> AccessOutcome {
        self.stats.fault_count += 1;

        let victim = self.replacer.pick_replacement_page(&mut self.frames);
        let evicted = self.frames[victim];

        if let Some(evicted_page) = evicted.page {
            log::debug!("mmu: página {:#X} despejada do quadro {}", evicted_page, victim);
        }

        let written_back = evicted.dirty;
        if written_back {
            log::debug!("mmu: quadro {} estava sujo, conta uma escrita", victim);
            self.stats.writeback_count += 1;
        }

        self.frames.load(victim, page_number, record.operation, clock);

        AccessOutcome::Fault {
            frame: victim,
            evicted: evicted.page,
            written_back,
        }
    }

    pub fn access(&mut self, record: AccessRecord) -> AccessOutcome {
        self.stats.access_count += 1;
        let clock = self.stats.access_count;

        let page_number = address::page_number(record.address, self.offset_bits);

        log::trace!(
            "mmu: acesso {:?} addr {:#X} page_num={:#X}",
            record.operation,
            record.address,
            page_number
        );

        match self.frames.find(page_number) {
            Some(frame) => {
                log::trace!("mmu: page hit no quadro {}", frame);
                self.frames.touch(frame, record.operation, clock);
                AccessOutcome::Hit { frame }
            }
            None => {
                log::trace!("mmu: page fault! tratando...");
                self.handle_page_fault(page_number, record, clock)
            }
        }
    }

    /// Consome os acessos em ordem e devolve os contadores finais.
    pub fn run<I>(&mut self, records: I) -> SimulationStats
    where
        I: IntoIterator<Item = AccessRecord>,
    {
        for record in records {
            self.access(record);
        }

        self.stats
    }
}
