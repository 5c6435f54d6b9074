use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use color_print::{ceprintln, cprintln};

use scemu::hooks::{dump::Dump, trace::Trace, Hook};
use scemu::image::{load_image, parse_hex};
use scemu::{Config, Error, Format, Halt, State};

#[derive(Parser, Debug)]
#[clap(
    name = "SCRAM Emulator",
    version = "v1.0.0",
    about = "Emulator for the SCRAM machine"
)]
struct Args {
    /// Stop after this many instructions
    #[arg(short = 't', long, value_parser = clap::value_parser!(u64).range(1..))]
    tmax: Option<u64>,

    /// Trace output format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Input is hex text as written by `scasm --hex`
    #[arg(long)]
    hex: bool,

    /// Memory image, `-` reads standard input
    #[arg(default_value = "main.scram")]
    input_file: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match emulate(&args) {
        Ok(Halt::Illegal { .. }) => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            ceprintln!("<red,bold>error</>: {}", err);
            ExitCode::from(2)
        }
    }
}

fn emulate(args: &Args) -> Result<Halt, Error> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .merge(args.tmax, args.format)
    .validate()?;

    // ------------------------------------------------------------------------
    // Initialize state machine model
    let state = {
        let bytes = read_input(&args.input_file)?;
        let bytes = match args.hex {
            true => parse_hex(&String::from_utf8_lossy(&bytes))?,
            false => bytes,
        };
        State::load(load_image(&bytes)?)
    };

    // ------------------------------------------------------------------------
    // Main loop
    let (state, cause) = match config.format {
        Format::Table => {
            println!("+-----------------------------------------------+");
            println!("| {:<45} |", args.input_file);
            println!("+-----------------------------------------------+");
            let mut dump = Dump::new();
            let mut hooks: [&mut dyn Hook; 1] = [&mut dump];
            scemu::run(state, config.tmax, &mut hooks)
        }
        Format::Yaml => {
            let mut trace = Trace::new();
            let mut hooks: [&mut dyn Hook; 1] = [&mut trace];
            let result = scemu::run(state, config.tmax, &mut hooks);
            print!("{}", trace.to_yaml()?);
            result
        }
        Format::Quiet => {
            let mut hooks: [&mut dyn Hook; 0] = [];
            scemu::run(state, config.tmax, &mut hooks)
        }
    };

    if config.format == Format::Quiet {
        cprintln!("<s>HALT</>: {}", cause);
        println!("pc={:X} ac={:02X} ({}) ic={}", state.pc, state.ac, state.ac, state.ic);
    }
    Ok(cause)
}

fn read_input(path: &str) -> Result<Vec<u8>, Error> {
    let mut buf = vec![];
    if path == "-" {
        std::io::stdin()
            .read_to_end(&mut buf)
            .map_err(Error::FileRead)?;
    } else {
        let mut file =
            std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        file.read_to_end(&mut buf).map_err(Error::FileRead)?;
    }
    Ok(buf)
}
