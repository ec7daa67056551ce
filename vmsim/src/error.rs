use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("erro ao abrir o arquivo {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("erro ao ler o trace: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Vm(#[from] vm::Error),

    #[error("a simulação com {0} abortou")]
    Worker(vm::Algorithm),
}

pub type Result<T> = std::result::Result<T, Error>;
