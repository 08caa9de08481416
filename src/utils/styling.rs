//! Terminal styling utilities for a modern, visually appealing TUI

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ███╗   ██╗██████╗ ██████╗ ██████╗ ██████╗ ███████╗
    ████╗  ██║██╔══██╗╚════██╗██╔══██╗██╔══██╗██╔════╝
    ██╔██╗ ██║██████╔╝ █████╔╝██████╔╝██║  ██║█████╗
    ██║╚██╗██║██╔══██╗██╔═══╝ ██╔═══╝ ██║  ██║██╔══╝
    ██║ ╚████║██████╔╝███████╗██║     ██████╔╝██║
    ╚═╝  ╚═══╝╚═════╝ ╚══════╝╚═╝     ╚═════╝ ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {}",
        style("Convert Jupyter notebooks to PDF, then merge them").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the introduction explaining what the tool does
pub fn print_intro() {
    println!("    This tool helps you:");
    println!("    • Convert multiple Jupyter notebooks to PDF format");
    println!("    • Select specific notebooks to convert");
    println!("    • Combine all PDFs into a single document (optional)");
    println!("    • Track conversion progress with size estimates");
    println!();
    println!("    Let's get started...");
}

/// Print the selection-syntax help shown before the selection prompt
pub fn print_selection_help() {
    println!();
    println!("    Select files to convert using any of these methods:");
    println!("    • Type 'all' or press Enter to select everything");
    println!("    • Type a single number (e.g., '3')");
    println!("    • Type a range with dash (e.g., '2-7')");
    println!("    • Type multiple selections with semicolon (e.g., '1;4;7')");
    println!("    • Combine ranges and numbers (e.g., '1-3;5;7-9')");
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARNING, style(message).yellow());
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("    {} {}", style("✗").red().bold(), style(message).red());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!("    {} {}", ROCKET, style("All done!").green().bold());
    println!();
}
