use std::process::ExitCode;

fn main() -> ExitCode {
    match header_sweep::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
