//! # Command Line Interface
//!
//! Read the program arguments, wire the machine to the standard streams,
//! and run the interpreter.

use env_logger;
use std::io::BufReader;
use boolx::exec::Interp;
mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli::build_cli().get_matches();
    let debug = matches.get_flag("debug");
    let files: Vec<&String> = match matches.get_many::<String>("source") {
        Some(vals) => vals.collect(),
        None => Vec::new()
    };

    if files.is_empty() {
        cli::build_cli().print_long_help().expect("could not print usage");
        std::process::exit(0);
    }
    if files.len() > 1 {
        eprintln!("Too many arguments.");
        std::process::exit(1);
    }

    let file = match std::fs::File::open(files[0]) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("{}",e);
            eprintln!("Can't open the source program file.");
            std::process::exit(1);
        }
    };
    let mut src = BufReader::new(file);

    if debug && !atty::is(atty::Stream::Stdin) {
        log::warn!("debug mode will read its confirmations from piped input");
    }

    let mut stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut interp = Interp::new(&mut stdin,&mut stdout);
    if debug {
        interp.enable_debug();
    }
    interp.scan_labels(&mut src);
    match interp.run(&mut src) {
        Ok(_) => {
            println!();
        },
        Err(e) => {
            boolx::report_error(&e);
            std::process::exit(1);
        }
    }
}
