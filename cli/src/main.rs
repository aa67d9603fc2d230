use std::process::exit;

fn main() {
    env_logger::init();
    let code = c5_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    exit(code);
}
