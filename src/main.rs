use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use numera::{
    convert::{
        from_numeral, random_numeral, replace_decimals_in_text, replace_numerals_in_text,
        to_numeral,
    },
    get_results,
    interpreter::Interpreter,
};

/// numera converts between Roman numerals and decimals and runs scripts of
/// the numeral statement language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert NUMBER to a Roman numeral.
    ToNumeral {
        /// A decimal between 1 and 3999.
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },
    /// Convert NUMERAL to a number.
    FromNumeral {
        /// A Roman numeral such as `MCMXCIV`.
        numeral: String,
    },
    /// Run a script of `;` separated statements.
    Run {
        /// Tells numera to read the script from a file instead.
        #[arg(short, long)]
        file: bool,

        contents: String,
    },
    /// Start an interactive session.
    Repl,
    /// Replace the numerals in TEXT with decimals, or the other way round.
    Replace {
        /// Replace decimals with numerals instead.
        #[arg(short, long)]
        to_numerals: bool,

        text: String,
    },
    /// Print a random numeral and its decimal.
    Random {
        /// Smallest value that may be drawn.
        #[arg(long, default_value_t = 1)]
        min: i64,
        /// Largest value that may be drawn.
        #[arg(long, default_value_t = 3999)]
        max: i64,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let outcome = match args.command {
        Command::ToNumeral { number } => to_numeral(number).map(|numeral| println!("{numeral}")),
        Command::FromNumeral { numeral } => from_numeral(&numeral).map(|number| println!("{number}")),
        Command::Replace { to_numerals, text } => {
            if to_numerals {
                println!("{}", replace_decimals_in_text(&text));
            } else {
                println!("{}", replace_numerals_in_text(&text));
            }
            Ok(())
        },
        Command::Random { min, max } => {
            random_numeral(min, max).map(|(numeral, number)| println!("{numeral} {number}"))
        },
        Command::Run { file, contents } => return run(file, contents),
        Command::Repl => return repl(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(file: bool, contents: String) -> ExitCode {
    let script = if file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let execution = get_results(&script);
    for value in &execution.results {
        println!("{value}");
    }
    for failure in &execution.failures {
        eprintln!("{failure}");
    }

    if execution.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn repl() -> ExitCode {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let Some(Ok(line)) = lines.next() else {
            println!();
            return ExitCode::SUCCESS;
        };

        let execution = interpreter.execute(&line);
        for value in &execution.results {
            println!("Result: {value}");
        }
        for failure in &execution.failures {
            eprintln!("{failure}");
        }
    }
}
