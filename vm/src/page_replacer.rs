//! Políticas de substituição de páginas.
//!
//! Cada política escolhe o quadro vítima numa falta de página. Nenhuma delas
//! olha o bit `dirty`: qualquer quadro pode ser despejado, sujo ou não. A
//! única alteração que uma política pode fazer na tabela é limpar bits de
//! referência (segunda chance).

use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::frame_table::FrameTable;

pub trait PageReplacer {
    /// Índice em `[0, frames.len())` do quadro a ser substituído.
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize;
}

/// FIFO sem fila: um cursor circular. Como tanto a carga inicial quanto as
/// substituições avançam o mesmo cursor, a ordem de despejo é a ordem de
/// chegada.
#[derive(Debug, Default)]
pub struct FIFOPageReplacer {
    next: usize,
}

impl FIFOPageReplacer {
    pub fn new() -> Self {
        FIFOPageReplacer { next: 0 }
    }
}

impl PageReplacer for FIFOPageReplacer {
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize {
        let victim = self.next;

        self.next = (self.next + 1) % frames.len();

        victim
    }
}

/// Menor `last_access`; empate fica com o menor índice.
#[derive(Debug, Default)]
pub struct LRUPageReplacer;

impl PageReplacer for LRUPageReplacer {
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize {
        let mut victim = 0;
        let mut oldest = u64::MAX;

        for (idx, frame) in frames.iter().enumerate() {
            if frame.last_access < oldest {
                oldest = frame.last_access;
                victim = idx;
            }
        }

        victim
    }
}

/// Segunda chance (relógio). Termina em no máximo 2N passos: uma volta
/// completa limpa todos os bits.
#[derive(Debug, Default)]
pub struct SecondChancePageReplacer {
    hand: usize,
}

impl SecondChancePageReplacer {
    pub fn new() -> Self {
        SecondChancePageReplacer { hand: 0 }
    }

    pub fn hand(&self) -> usize {
        self.hand
    }
}

impl PageReplacer for SecondChancePageReplacer {
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize {
        let frame_count = frames.len();

        loop {
            let idx = self.hand;
            self.hand = (self.hand + 1) % frame_count;

            if !frames[idx].referenced {
                return idx;
            }

            log::trace!("second_chance: quadro {} ganha segunda chance", idx);
            frames.clear_referenced(idx);
        }
    }
}

#[derive(Debug)]
pub struct RandomPageReplacer {
    rng: StdRng,
}

impl RandomPageReplacer {
    /// Com `seed` a sequência de vítimas é reproduzível; sem, usa entropia do SO.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        RandomPageReplacer { rng }
    }
}

impl PageReplacer for RandomPageReplacer {
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize {
        self.rng.gen_range(0..frames.len())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fifo,
    Lru,
    SecondChance,
    Random,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fifo,
        Algorithm::Lru,
        Algorithm::SecondChance,
        Algorithm::Random,
    ];

    /// Nomes desconhecidos caem em `Random`, sem erro.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fifo" => Algorithm::Fifo,
            "lru" => Algorithm::Lru,
            "2a" => Algorithm::SecondChance,
            "random" => Algorithm::Random,
            other => {
                log::warn!("algoritmo {:?} desconhecido, usando random", other);
                Algorithm::Random
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fifo => "fifo",
            Algorithm::Lru => "lru",
            Algorithm::SecondChance => "2a",
            Algorithm::Random => "random",
        }
    }

    pub fn replacer(self, seed: Option<u64>) -> Replacer {
        match self {
            Algorithm::Fifo => Replacer::Fifo(FIFOPageReplacer::new()),
            Algorithm::Lru => Replacer::Lru(LRUPageReplacer),
            Algorithm::SecondChance => Replacer::SecondChance(SecondChancePageReplacer::new()),
            Algorithm::Random => Replacer::Random(RandomPageReplacer::new(seed)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualquer uma das quatro políticas, escolhida em tempo de execução.
#[derive(Debug)]
pub enum Replacer {
    Fifo(FIFOPageReplacer),
    Lru(LRUPageReplacer),
    SecondChance(SecondChancePageReplacer),
    Random(RandomPageReplacer),
}

impl Replacer {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Replacer::Fifo(_) => Algorithm::Fifo,
            Replacer::Lru(_) => Algorithm::Lru,
            Replacer::SecondChance(_) => Algorithm::SecondChance,
            Replacer::Random(_) => Algorithm::Random,
        }
    }
}

impl PageReplacer for Replacer {
    fn pick_replacement_page(&mut self, frames: &mut FrameTable) -> usize {
        match self {
            Replacer::Fifo(r) => r.pick_replacement_page(frames),
            Replacer::Lru(r) => r.pick_replacement_page(frames),
            Replacer::SecondChance(r) => r.pick_replacement_page(frames),
            Replacer::Random(r) => r.pick_replacement_page(frames),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Operation;

    fn full_table(pages: &[u64]) -> FrameTable {
        let mut table = FrameTable::new(pages.len()).unwrap();

        for (idx, &page) in pages.iter().enumerate() {
            table.load(idx, page, Operation::Read, idx as u64 + 1);
        }

        table
    }

    #[test]
    fn fifo_cycles_through_frames() {
        let mut table = full_table(&[10, 11, 12]);
        let mut fifo = FIFOPageReplacer::new();

        let picks: Vec<_> = (0..7).map(|_| fifo.pick_replacement_page(&mut table)).collect();

        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn lru_picks_oldest_access() {
        let mut table = full_table(&[10, 11, 12]);
        table.touch(0, Operation::Read, 10);

        assert_eq!(LRUPageReplacer.pick_replacement_page(&mut table), 1);
    }

    #[test]
    fn lru_tie_goes_to_lowest_index() {
        let mut table = FrameTable::new(3).unwrap();

        assert_eq!(LRUPageReplacer.pick_replacement_page(&mut table), 0);
    }

    #[test]
    fn lru_leaves_frames_untouched() {
        let mut table = full_table(&[10, 11, 12]);
        let before: Vec<_> = table.iter().copied().collect();

        LRUPageReplacer.pick_replacement_page(&mut table);

        assert_eq!(table.iter().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn second_chance_all_referenced_terminates_at_start() {
        let mut table = full_table(&[10, 11, 12]);
        let mut clock = SecondChancePageReplacer::new();

        assert!(table.iter().all(|frame| frame.referenced));

        let victim = clock.pick_replacement_page(&mut table);

        assert_eq!(victim, 0);
        assert!(table.iter().all(|frame| !frame.referenced));
        assert_eq!(clock.hand(), 1);
    }

    #[test]
    fn second_chance_skips_referenced_frames() {
        let mut table = full_table(&[10, 11, 12]);
        table.clear_referenced(2);

        let mut clock = SecondChancePageReplacer::new();

        assert_eq!(clock.pick_replacement_page(&mut table), 2);
        assert!(!table[0].referenced);
        assert!(!table[1].referenced);
        assert_eq!(clock.hand(), 0);
    }

    #[test]
    fn second_chance_never_touches_dirty_or_page() {
        let mut table = full_table(&[10, 11]);
        table.touch(1, Operation::Write, 5);

        let mut clock = SecondChancePageReplacer::new();
        clock.pick_replacement_page(&mut table);

        assert_eq!(table.resident_pages(), vec![Some(10), Some(11)]);
        assert!(table[1].dirty);
        assert_eq!(table[1].last_access, 5);
    }

    #[test]
    fn random_stays_in_range() {
        let mut table = full_table(&[1, 2, 3, 4, 5]);
        let mut random = RandomPageReplacer::new(None);

        for _ in 0..1000 {
            assert!(random.pick_replacement_page(&mut table) < 5);
        }
    }

    #[test]
    fn random_with_seed_is_reproducible() {
        let mut table = full_table(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut a = RandomPageReplacer::new(Some(42));
        let mut b = RandomPageReplacer::new(Some(42));

        let picks_a: Vec<_> = (0..50).map(|_| a.pick_replacement_page(&mut table)).collect();
        let picks_b: Vec<_> = (0..50).map(|_| b.pick_replacement_page(&mut table)).collect();

        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::from_name("fifo"), Algorithm::Fifo);
        assert_eq!(Algorithm::from_name("lru"), Algorithm::Lru);
        assert_eq!(Algorithm::from_name("2a"), Algorithm::SecondChance);
        assert_eq!(Algorithm::from_name("random"), Algorithm::Random);
        assert_eq!(Algorithm::from_name("qualquer"), Algorithm::Random);
        assert_eq!(Algorithm::from_name("FIFO"), Algorithm::Random);

        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), algorithm);
            assert_eq!(algorithm.replacer(Some(1)).algorithm(), algorithm);
        }
    }
}
