mod cli;
mod error;
mod report;
mod trace;

use std::{io::BufRead, process::ExitCode, thread};

use clap::Parser;
use vm::{AccessRecord, Algorithm, Mmu, SimConfig, SimulationStats};

use crate::{
    cli::Cli,
    error::{Error, Result},
    report::Report,
    trace::TraceReader,
};

/// Consome o trace direto do arquivo, sem guardar os acessos.
fn simulate_trace<R: BufRead>(
    config: SimConfig,
    algorithm: Algorithm,
    seed: Option<u64>,
    mut trace: TraceReader<R>,
) -> Result<SimulationStats> {
    let mut mmu = Mmu::new(config, algorithm.replacer(seed))?;

    for record in trace.by_ref() {
        mmu.access(record.map_err(Error::Read)?);
    }

    let stats = mmu.stats();

    log::info!(
        "vmsim: {} linhas lidas, {:.2}% de page faults com {}",
        trace.line_number(),
        stats.fault_rate() * 100.0,
        algorithm
    );

    Ok(stats)
}

/// Uma thread por política; cada uma tem sua própria `Mmu`, só o trace é
/// compartilhado (e só para leitura).
fn simulate_all(config: SimConfig, seed: Option<u64>, records: &[AccessRecord]) -> Result<Vec<Report>> {
    thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let handle = scope.spawn(move || -> vm::Result<Report> {
                    let mut mmu = Mmu::new(config, algorithm.replacer(seed))?;
                    let stats = mmu.run(records.iter().copied());

                    Ok(Report::new(config, algorithm, stats))
                });

                (algorithm, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(algorithm, handle)| match handle.join() {
                Ok(report) => Ok(report?),
                Err(_) => Err(Error::Worker(algorithm)),
            })
            .collect()
    })
}

fn run(cli: &Cli) -> Result<()> {
    let config = SimConfig::new(cli.page_size, cli.memory_size)?;

    log::info!(
        "vmsim: memória {} / página {} = {} quadros",
        config.memory_size(),
        config.page_size(),
        config.frame_count()
    );

    let trace = TraceReader::open(&cli.trace_file).map_err(|source| Error::Open {
        path: cli.trace_file.clone(),
        source,
    })?;

    if cli.all {
        let records = trace
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(Error::Read)?;

        log::info!("vmsim: {} acessos lidos, rodando todas as políticas", records.len());

        let reports = simulate_all(config, cli.seed, &records)?;

        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            print!("{}", report);
        }
    } else {
        let algorithm = Algorithm::from_name(&cli.algorithm);
        let stats = simulate_trace(config, algorithm, cli.seed, trace)?;

        print!(
            "{}",
            Report::new(config, algorithm, stats).with_policy_name(&cli.algorithm)
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("vmsim: {:?}", err);
            eprintln!("erro: {}", err);
            ExitCode::FAILURE
        }
    }
}
