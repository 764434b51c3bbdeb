/*
 * This is the CLI frontend for the LS-8 library.
 */
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ansi_term::Colour;
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ls8_lib::{disassemble, MachineConfig, Processor, Program};

mod config;

/// LS-8 virtual CPU
/// Loads a program written as one binary byte per line and runs it until HLT.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Program file to load at address 0
    filename: PathBuf,

    /// YAML machine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line before every instruction
    #[arg(short, long)]
    trace: bool,

    /// Print the disassembled program and exit
    #[arg(short, long)]
    disassemble: bool,

    /// Raise the log level, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.trace {
            return LevelFilter::Trace;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        print_err(&format!("{:#}", err));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    SimpleLogger::new()
        .with_level(cli.log_level())
        .init()
        .context("Failed to initialise the logger")?;

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => MachineConfig::default(),
    };
    let program = Program::from_file(&cli.filename)
        .with_context(|| format!("Failed to load program {}", cli.filename.display()))?;
    let mut processor = Processor::new(config, io::stdout())?;
    processor
        .load(&program)
        .with_context(|| format!("Program {} does not fit in memory", cli.filename.display()))?;

    if cli.disassemble {
        for line in disassemble(0x00, program.len(), processor.memory())? {
            println!("{}", line);
        }
        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = interrupted.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    })
    .context("Failed to set the CTRL-C handler")?;

    exec_run(&mut processor, &interrupted)
}

fn exec_run<W: Write>(processor: &mut Processor<W>, interrupted: &Arc<AtomicBool>) -> Result<()> {
    let summary = processor.run_until(|| interrupted.load(Ordering::Relaxed))?;

    if !processor.is_halted() {
        bail!("Interrupted after {} cpu instructions.", summary.steps);
    }
    Ok(())
}

fn print_err(msg: &str) {
    eprintln!("{}: {}", Colour::Red.paint("Error"), msg);
}
