use std::process::ExitCode;
use toyfront::verify::boolean_literal_suite;

fn main() -> ExitCode {
    env_logger::init();

    let suite = boolean_literal_suite();
    let failures = suite.run();
    for (input, mismatch) in &failures {
        eprintln!("{input:?}: {mismatch}");
    }

    if failures.is_empty() {
        println!("{}: {} cases passed", suite.name(), suite.len());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
