use std::io::{self, Write};
use std::process::ExitCode;

use log::debug;
use treepatrol::input::PatrolParser;
use treepatrol::parser::{ByteParser, ParsingError};
use treepatrol::patrol::plan_route;

fn run() -> Result<usize, ParsingError> {
    let mut byte_parser = ByteParser::from_reader(io::stdin().lock())?;
    let input = PatrolParser::new_defaults().parse(&mut byte_parser)?;
    let route = plan_route(input.tree, &input.marked);
    debug!("{route:?}");
    Ok(route.length)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(length) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{length}").and_then(|_| stdout.flush()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
