//! TraceReader - lê os acessos à memória de um arquivo de trace.
//!
//! Cada linha do arquivo é um acesso:
//!
//! | campo    | formato                                        |
//! |----------|------------------------------------------------|
//! | endereço | hexadecimal, com ou sem `0x`, até 64 bits      |
//! | operação | `R` (leitura) ou `W` (escrita), só maiúsculas     |
//!
//! separados por espaço, por exemplo `0041f7a0 R`.
//!
//! Linhas em branco são puladas. A primeira linha fora desse formato encerra
//! o trace sem erro: a simulação fica com o que foi lido até ali. Erro de
//! leitura do arquivo, por outro lado, é erro de verdade.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use vm::{AccessRecord, Operation};

/// Endereço hexadecimal de até 64 bits.
///
/// Os dígitos são completados com zeros à esquerda até 16 e decodificados
/// direto para os 8 bytes big-endian do `u64`.
fn parse_address(text: &str) -> Option<u64> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    if digits.len() > 16 {
        return None;
    }

    let padded = format!("{:0>16}", digits);
    let mut bytes = [0u8; 8];

    hex::decode_to_slice(padded, &mut bytes).ok()?;

    Some(u64::from_be_bytes(bytes))
}

fn parse_operation(text: &str) -> Option<Operation> {
    match text {
        "R" => Some(Operation::Read),
        "W" => Some(Operation::Write),
        _ => None,
    }
}

/// Interpreta uma linha não vazia do trace.
pub fn parse_line(line: &str) -> Option<AccessRecord> {
    let mut fields = line.split_whitespace();

    let address = parse_address(fields.next()?)?;
    let operation = parse_operation(fields.next()?)?;

    if fields.next().is_some() {
        return None;
    }

    Some(AccessRecord { address, operation })
}

pub struct TraceReader<R> {
    lines: Lines<R>,
    line_number: usize,
    finished: bool,
}

impl TraceReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: &P) -> io::Result<Self> {
        let file = File::open(path)?;

        Ok(TraceReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        TraceReader {
            lines: reader.lines(),
            line_number: 0,
            finished: false,
        }
    }

    /// Quantas linhas já foram consumidas.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = io::Result<AccessRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                // texto que não é UTF-8 é só mais uma linha malformada
                Some(Err(err)) if err.kind() == ErrorKind::InvalidData => {
                    log::debug!("trace: linha {} ilegível, fim do trace", self.line_number + 1);
                    self.finished = true;
                    return None;
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };

            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            return match parse_line(&line) {
                Some(record) => Some(Ok(record)),
                None => {
                    log::debug!("trace: linha {} malformada ({:?}), fim do trace", self.line_number, line);
                    self.finished = true;
                    None
                }
            };
        }
    }
}
