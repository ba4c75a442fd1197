#![forbid(unsafe_code)]

fn main() {
    std::process::exit(playground::cli::run_from_args(std::env::args_os()));
}
