//! C-- interpreter CLI.

use cmmc::commands::{lex_file, parse_file, run_file};
use cmmc::{init_tracing, Config, RunError};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "run" => {
            let mut config = Config::from_env();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--quiet" || arg == "-q" {
                    config.print_result = false;
                } else if (arg == "-" || !arg.starts_with('-')) && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: cmm run [--quiet] <file.cmm|->");
                return ExitCode::FAILURE;
            };

            run_file(path, &config)
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: cmm lex <file.cmm|->");
                return ExitCode::FAILURE;
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: cmm parse <file.cmm|->");
                return ExitCode::FAILURE;
            }
            parse_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("cmm {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            // Allow `cmm file.cmm` as shorthand for `cmm run file.cmm`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("cmm"))
            {
                run_file(command, &Config::from_env())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    };

    finish(result)
}

fn finish(result: Result<(), RunError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        // messages already went to stdout
        Err(e) if e.is_reported() => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("C-- interpreter");
    println!();
    println!("Usage: cmm <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.cmm|->    Lex, parse and evaluate a program (`-` reads stdin)");
    println!("  lex <file.cmm|->    Print the token stream");
    println!("  parse <file.cmm|->  Print the parsed statements and syntax errors");
    println!("  help                Show this message");
    println!("  version             Show version information");
    println!();
    println!("Run options:");
    println!("  -q, --quiet         Do not print the program's final value");
    println!();
    println!("Environment:");
    println!("  CMM_PRINT_RESULT=0  Same as --quiet");
    println!("  RUST_LOG=<filter>   Enable tracing output on stderr (e.g. RUST_LOG=cmm_parse=debug)");
    println!();
    println!("Shorthand:");
    println!("  cmm <file.cmm>      Same as `cmm run <file.cmm>`");
}
