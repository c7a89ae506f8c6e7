//! ccopy CLI
//!
//! Injects concurrent copy constructors into classes deriving from a marker.

use ccopyc::{init_tracing, parse_args, process_file, Command, DriverError, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Ok(Command::Version) => {
            println!("ccopy {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), DriverError> {
    // Progress goes to stderr when stdout carries the rewritten unit.
    let progress = |line: &str| {
        if options.to_stdout {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    progress(&format!("Source file: {}", options.input().display()));
    if !options.to_stdout {
        progress(&format!(
            "Generating output to: {}",
            options.output_path().display()
        ));
    }

    let outcome = process_file(options, |class| progress(&class.to_string()))?;
    if let Some(text) = outcome.text {
        print!("{text}");
    }
    Ok(())
}

fn print_usage() {
    println!("ccopy - concurrent copy constructor generator");
    println!();
    println!("Usage: ccopy <file> [options]");
    println!();
    println!("Options:");
    println!("  -o <path>            Output file (default: <name>_out.<ext> beside the input)");
    println!("  --output=<path>      Same as -o");
    println!("  --marker=<Name>      Marker base class that opts a class in (default: C4)");
    println!("  --marker-suffix      Also accept qualified bases ending in ::<Name>");
    println!("  --author=<Name>      Value of the AUTHOR define in the output (default: ccopy)");
    println!("  --stdout             Print the rewritten source instead of writing a file");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=ccopy_gen=debug) for diagnostic output.");
}
