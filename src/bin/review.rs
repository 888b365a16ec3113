use std::process::ExitCode;

fn main() -> ExitCode {
    hookguard::main_with(hookguard::review::run)
}
