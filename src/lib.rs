pub mod cache;
pub mod catalog;
pub mod config;
pub mod grid;
pub mod model;
pub mod runtime;
pub mod samples;
pub mod ui;

pub fn run() -> Result<(), String> {
    ui::run()
}
