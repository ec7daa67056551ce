//! Tabela de quadros físicos, totalmente associativa: a busca por página é
//! uma varredura linear, não existe tabela de páginas indexada.

use std::ops::Index;

use crate::{
    address::Operation,
    error::{Error, Result},
};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Página residente. `None` é quadro vazio, distinto da página 0.
    pub page: Option<u64>,
    pub dirty: bool,
    pub referenced: bool,
    pub last_access: u64,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }
}

#[derive(Debug)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new(frame_count: usize) -> Result<Self> {
        let mut frames = Vec::new();

        frames
            .try_reserve_exact(frame_count)
            .map_err(|source| Error::FrameAllocation { frame_count, source })?;

        frames.resize(frame_count, Frame::default());

        Ok(FrameTable { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Primeiro quadro (em ordem de índice) que contém `page`.
    pub fn find(&self, page: u64) -> Option<usize> {
        self.frames.iter().position(|frame| frame.page == Some(page))
    }

    /// Sobrescreve o quadro `idx` com uma página recém carregada.
    pub fn load(&mut self, idx: usize, page: u64, operation: Operation, clock: u64) {
        self.frames[idx] = Frame {
            page: Some(page),
            dirty: operation.is_write(),
            referenced: true,
            last_access: clock,
        };
    }

    pub fn touch(&mut self, idx: usize, operation: Operation, clock: u64) {
        let frame = &mut self.frames[idx];

        frame.last_access = clock;
        frame.referenced = true;
        frame.dirty |= operation.is_write();
    }

    /// Única mutação permitida às políticas de substituição.
    pub fn clear_referenced(&mut self, idx: usize) {
        self.frames[idx].referenced = false;
    }

    /// Páginas residentes, quadro a quadro.
    pub fn resident_pages(&self) -> Vec<Option<u64>> {
        self.frames.iter().map(|frame| frame.page).collect()
    }
}

impl Index<usize> for FrameTable {
    type Output = Frame;

    fn index(&self, idx: usize) -> &Frame {
        &self.frames[idx]
    }
}
