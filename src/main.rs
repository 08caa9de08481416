//! nb2pdf: interactive notebook-to-PDF conversion and merging

use clap::Parser;

use nb2pdf::cli::{prompt, Args};
use nb2pdf::pipeline::{run_session, SessionError};
use nb2pdf::utils::styling;

fn main() {
    // No options beyond -h/-V; parsing still handles those
    let _args = Args::parse();

    if let Err(err) = prompt::install_interrupt_handler() {
        styling::print_warning(&format!("Could not install Ctrl+C handler: {:#}", err));
    }

    if let Err(err) = run_session() {
        println!();
        let code = match err.downcast_ref::<SessionError>() {
            Some(SessionError::Cancelled) => {
                styling::print_error("Operation cancelled by user.");
                130
            }
            _ => {
                styling::print_error(&format!("{:#}", err));
                1
            }
        };
        std::process::exit(code);
    }
}
