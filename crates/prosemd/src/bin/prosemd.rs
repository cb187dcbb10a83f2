use std::process::ExitCode;

fn main() -> ExitCode {
    match prosemd::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", prosemd::format_error(&err));
            ExitCode::FAILURE
        }
    }
}
