//! asn1dump command line entry point

use anyhow::Context;
use asn1dump::cli::{Cli, normalize_args};
use asn1dump::{dump, hexdump};
use asn1dump_ber::BerReader;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    log::debug!("{:?}", cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("asn1dump: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.dump {
        let mut file = File::open(&cli.file)
            .with_context(|| format!("can't open file '{}'", cli.file.display()))?;
        file.seek(SeekFrom::Start(cli.offset))?;
        let count = hexdump(BufReader::new(file), &mut out, cli.offset)?;
        log::info!("dumped {} bytes", count);
        return Ok(ExitCode::SUCCESS);
    }

    let reader = BerReader::open(&cli.file)
        .with_context(|| format!("can't open file '{}'", cli.file.display()))?;

    match dump(reader, &mut out, &cli.config()) {
        Ok(summary) => {
            log::info!(
                "stopped at offset {} after {} units ({} bytes)",
                summary.end_offset,
                summary.units,
                summary.bytes
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_fatal() => {
            writeln!(out, "{}", e)?;
            out.flush()?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
