#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    env_logger::init();

    if let Err(error) = nine_grid::run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
