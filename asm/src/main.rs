use std::io::Write;
use std::process::ExitCode;

use color_print::ceprintln;
use scasm::error::IoError;
use scasm::listing::{hex, print_dump};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.s")]
    input: String,

    /// Output file, standard output when omitted
    #[clap(short, long)]
    output: Option<String>,

    /// Write the image as hex text instead of raw bytes
    #[clap(long)]
    hex: bool,

    /// Dump assembly listing to standard error
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            ceprintln!("<red,bold>error</>: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the source assembled without diagnostics.
fn run(args: &Args) -> Result<bool, IoError> {
    let code = std::fs::read_to_string(&args.input)
        .map_err(|e| IoError::FileRead(args.input.clone(), e))?;
    let asm = scasm::assemble_str(&code);

    let lines: Vec<&str> = code.lines().collect();
    for diag in &asm.diags {
        diag.print_diag(&args.input, &lines);
    }
    if asm.is_truncated() {
        ceprintln!("<yellow,bold>warning</>: only the first 16 words were written");
    }

    let bytes = match args.hex {
        true => format!("{}\n", hex(&asm.mem)).into_bytes(),
        false => asm.mem.to_vec(),
    };
    match &args.output {
        Some(path) => {
            let mut file =
                std::fs::File::create(path).map_err(|e| IoError::FileCreate(path.clone(), e))?;
            file.write_all(&bytes)
                .map_err(|e| IoError::FileWrite(path.clone(), e))?;
            if args.dump {
                ceprintln!("  > <underline>{}</>", path);
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| IoError::FileWrite(format!("<stdout>"), e))?;
        }
    }

    if args.dump {
        print_dump(&args.input, &asm);
    }
    Ok(asm.is_ok())
}
