//! End-to-end interactive session.
//!
//! Sequences the prompts, listing, selection, conversion, and merge steps.
//! Every failure is reported as a value; the exit-code decision lives in
//! `main`.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;

use crate::cli::pager;
use crate::cli::prompt::{self, PromptOutcome};
use crate::pipeline::error::SessionError;
use crate::pipeline::workspace::FileEntry;
use crate::pipeline::{convert, merge, naming, selection, workspace};
use crate::utils::{progress, styling};

/// Deadline for the big decisions (directory, selection, merge yes/no).
const CONFIRM_TIMEOUT: Duration = Duration::from_secs(300);

/// Deadline for the short file-name questions.
const NAME_TIMEOUT: Duration = Duration::from_secs(60);

/// Run the whole interactive session.
pub fn run_session() -> Result<()> {
    styling::print_banner(env!("CARGO_PKG_VERSION"));
    styling::print_intro();

    let folder = resolve_folder()?;

    let entries = workspace::list_notebooks(&folder)?;
    if entries.is_empty() {
        return Err(SessionError::NoNotebooksFound(folder).into());
    }

    println!();
    println!(
        "    This folder contains {} notebooks for a total of {:.2} MB",
        style(entries.len()).yellow().bold(),
        workspace::total_size_mb(&entries)
    );

    pager::browse(&entries, pager::DEFAULT_PAGE_SIZE).map_err(|_| SessionError::Cancelled)?;

    let selected = select_files(entries.len())?;

    // Merging only makes sense for more than one file; ask before the
    // conversions start so the user can walk away afterwards.
    let merge_requested = if selected.len() > 1 {
        prompt::ask_yes_no(
            "Do you want to merge all PDFs into a single PDF? (yes/no)",
            CONFIRM_TIMEOUT,
            true,
        )
        .map_err(|_| SessionError::Cancelled)?
    } else {
        false
    };

    let pdf_paths = convert_selected(&folder, &entries, &selected)?;

    if merge_requested {
        merge_flow(&folder, &pdf_paths)?;
    } else {
        println!();
        styling::print_success("PDFs have been kept separate.");
    }

    styling::print_completion();
    Ok(())
}

/// Confirm the working directory, or take an alternative path from the user.
/// A timed-out confirmation keeps the working directory.
fn resolve_folder() -> Result<PathBuf> {
    let current = env::current_dir().context("Failed to determine the current working directory")?;
    let folder_name = current
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| current.display().to_string());

    println!();
    println!(
        "    The notebooks you want to convert are in the current working directory '{}'.",
        style(folder_name).cyan()
    );

    let use_current = prompt::ask_yes_no("Is this correct? (y/n)", CONFIRM_TIMEOUT, true)
        .map_err(|_| SessionError::Cancelled)?;
    if use_current {
        return Ok(current);
    }

    match prompt::ask(
        "Enter the path where the notebooks are located:",
        CONFIRM_TIMEOUT,
    ) {
        PromptOutcome::Value(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(SessionError::NoPathProvided.into());
            }
            let path = PathBuf::from(text);
            if path.is_dir() {
                Ok(path)
            } else {
                Err(SessionError::PathNotFound(path).into())
            }
        }
        // No answer within the deadline falls back to the working directory
        PromptOutcome::TimedOut => Ok(current),
        PromptOutcome::Cancelled => Err(SessionError::Cancelled.into()),
    }
}

/// Prompt for a selection expression until it parses, timing out to "all".
fn select_files(total: usize) -> Result<Vec<usize>> {
    loop {
        styling::print_selection_help();
        match prompt::ask("Your selection:", CONFIRM_TIMEOUT) {
            PromptOutcome::Value(text) => match selection::parse(&text, total) {
                Ok(indices) => {
                    println!();
                    println!(
                        "    Selected {} unique files.",
                        style(indices.len()).yellow().bold()
                    );
                    return Ok(indices);
                }
                Err(err) => {
                    styling::print_warning(&format!(
                        "{}. Please try again or press Ctrl+C to cancel.",
                        err
                    ));
                }
            },
            PromptOutcome::TimedOut => return Ok((1..=total).collect()),
            PromptOutcome::Cancelled => return Err(SessionError::Cancelled.into()),
        }
    }
}

/// Convert the selected notebooks sequentially in selection order and return
/// the sibling PDF paths.
fn convert_selected(
    folder: &Path,
    entries: &[FileEntry],
    selected: &[usize],
) -> Result<Vec<PathBuf>> {
    let bar = progress::create_progress_bar(selected.len() as u64, "Converting");
    let mut pdf_paths = Vec::with_capacity(selected.len());

    for (count, &index) in selected.iter().enumerate() {
        let entry = &entries[index - 1];
        let notebook_path = folder.join(&entry.name);

        let status = bar.suspend(|| {
            println!();
            println!("    Converting file {}/{}:", count + 1, selected.len());
            println!("    → {} ({:.2} MB)", entry.name, entry.size_mb());
            convert::convert_notebook(&notebook_path)
        })?;

        if !status.success() {
            bar.suspend(|| {
                styling::print_warning(&format!("nbconvert reported {} for {}", status, entry.name));
            });
        }

        pdf_paths.push(convert::pdf_sibling(&notebook_path));
        bar.inc(1);
    }

    bar.finish_and_clear();
    println!();
    styling::print_success("Conversion complete!");
    Ok(pdf_paths)
}

/// Name the merged PDF, resolve collisions, merge, and retry once with the
/// default name on failure.
fn merge_flow(folder: &Path, pdf_paths: &[PathBuf]) -> Result<()> {
    let name = ask_merge_name()?;
    let mut output = folder.join(&name);
    if output.exists() {
        output = resolve_collision(folder, output)?;
    }

    let spinner = progress::create_spinner(&format!("Merging {} PDFs...", pdf_paths.len()));
    match merge::merge_pdfs(pdf_paths, &output) {
        Ok(()) => {
            progress::finish_with_success(
                &spinner,
                &format!("All PDFs have been merged into: {}", output.display()),
            );
            Ok(())
        }
        Err(err) => {
            spinner.finish_and_clear();
            styling::print_warning(&format!("Error saving merged PDF: {:#}", err));
            let fallback = folder.join(naming::DEFAULT_MERGED_NAME);
            println!(
                "    Saving with fallback name: {}",
                naming::DEFAULT_MERGED_NAME
            );
            merge::merge_pdfs(pdf_paths, &fallback)
                .map_err(|retry_err| SessionError::MergeFailed(format!("{:#}", retry_err)))?;
            styling::print_success(&format!(
                "All PDFs have been merged into: {}",
                fallback.display()
            ));
            Ok(())
        }
    }
}

/// Ask for the merged PDF name. Empty input and a timeout both resolve to
/// the default name.
fn ask_merge_name() -> Result<String> {
    match prompt::ask("Enter name for merged PDF:", NAME_TIMEOUT) {
        PromptOutcome::Value(text) => Ok(naming::sanitize(&text)),
        PromptOutcome::TimedOut => {
            println!("    Using default filename due to timeout...");
            Ok(naming::DEFAULT_MERGED_NAME.to_string())
        }
        PromptOutcome::Cancelled => Err(SessionError::Cancelled.into()),
    }
}

/// Three-way choice when the proposed output already exists. Anything but an
/// explicit choice falls back to an auto-generated unique name, so an
/// existing file is never silently overwritten.
fn resolve_collision(folder: &Path, proposed: PathBuf) -> Result<PathBuf> {
    let display_name = proposed
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| proposed.display().to_string());

    println!();
    styling::print_warning(&format!("File '{}' already exists!", display_name));
    println!("    Choose an action:");
    println!("      1. Overwrite existing file");
    println!("      2. Auto-generate unique name");
    println!("      3. Enter new filename");

    match prompt::ask("Enter choice (1-3):", NAME_TIMEOUT) {
        PromptOutcome::Value(choice) => match choice.trim() {
            "1" => Ok(proposed),
            "2" => Ok(announce_unique(naming::resolve_unique(&proposed))),
            "3" => {
                let name = ask_merge_name()?;
                let output = folder.join(name);
                if output.exists() {
                    Ok(announce_unique(naming::resolve_unique(&output)))
                } else {
                    Ok(output)
                }
            }
            _ => {
                println!("    Invalid choice, using auto-generated name");
                Ok(naming::resolve_unique(&proposed))
            }
        },
        PromptOutcome::TimedOut => {
            println!("    Timeout, using auto-generated name");
            Ok(naming::resolve_unique(&proposed))
        }
        PromptOutcome::Cancelled => Err(SessionError::Cancelled.into()),
    }
}

fn announce_unique(path: PathBuf) -> PathBuf {
    if let Some(name) = path.file_name() {
        println!("    Using filename: {}", name.to_string_lossy());
    }
    path
}
