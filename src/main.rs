mod app;
mod catalog;
mod cli;
mod constants;
mod display;
mod domain;
mod error;
mod logging;
mod paths;
mod store;

fn main() {
    cli::run_cli();
}
