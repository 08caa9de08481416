//! Timeout-raced interactive prompts.
//!
//! A single background thread owns stdin for the lifetime of the process and
//! forwards every line into a channel. Each prompt races that channel against
//! a wall-clock deadline while re-rendering an in-place countdown, so the
//! session always makes progress even when the user walks away. The channel
//! doubles as the single-assignment outcome slot: per call, the first of
//! {line received, end of input, interrupt, deadline} resolves the outcome
//! and nothing can overwrite it afterwards.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use console::{style, Term};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Poll granularity of the countdown loop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const YES_ALIASES: &[&str] = &["y", "yes"];
const NO_ALIASES: &[&str] = &["n", "no"];

/// Result of a timeout-raced prompt. Produced exactly once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// A full line arrived before the deadline.
    Value(String),
    /// The deadline passed first; the caller applies its documented default.
    TimedOut,
    /// The read was aborted (Ctrl+C or end of input). Always session-fatal.
    Cancelled,
}

/// Marker error for a user-aborted read.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("operation cancelled by user")]
pub struct Cancelled;

/// Set by the SIGINT handler; observed by the countdown loop.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Lines read from stdin by the process-wide reader thread. `None` marks end
/// of input; the reader exits after sending it. A single long-lived reader
/// avoids stranding multiple blocked readers on stdin when prompts time out.
static STDIN_LINES: Lazy<Mutex<Receiver<Option<String>>>> = Lazy::new(|| {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut lines = io::stdin().lock().lines();
        loop {
            match lines.next() {
                Some(Ok(line)) => {
                    if tx.send(Some(line)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) | None => {
                    let _ = tx.send(None);
                    break;
                }
            }
        }
    });
    Mutex::new(rx)
});

/// Route SIGINT into the prompt race so a blocked prompt resolves to
/// `Cancelled` instead of killing the process mid-render.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))?;
    Ok(())
}

/// Ask a question with a deadline.
///
/// Returns `Value` with the typed line, `TimedOut` when the deadline passes
/// first, or `Cancelled` on end of input or interrupt.
pub fn ask(prompt_text: &str, timeout: Duration) -> PromptOutcome {
    println!();
    println!(
        "{}",
        style(format!("You have {} to respond...", format_timeout(timeout))).dim()
    );
    println!(
        "{} {}",
        style("→").cyan().bold(),
        style(prompt_text).bold()
    );

    let rx = STDIN_LINES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    race(&rx, timeout, &Term::stdout())
}

/// Race a line receiver against a deadline, rendering an in-place countdown
/// on `term`. Public so tests can inject their own channel.
pub fn race(rx: &Receiver<Option<String>>, timeout: Duration, term: &Term) -> PromptOutcome {
    let deadline = Instant::now() + timeout;
    let mut shown_remaining: Option<u64> = None;

    let outcome = loop {
        if INTERRUPTED.load(Ordering::SeqCst) {
            break PromptOutcome::Cancelled;
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        let whole_secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        if shown_remaining != Some(whole_secs) {
            let _ = term.clear_line();
            let _ = term.write_str(&format!("    Time remaining: {:>4}s ", whole_secs));
            shown_remaining = Some(whole_secs);
        }

        // A zero remaining still gets one poll tick, so input that is
        // already queued wins over an expired deadline.
        let wait = if remaining.is_zero() {
            POLL_INTERVAL
        } else {
            remaining.min(POLL_INTERVAL)
        };

        match rx.recv_timeout(wait) {
            Ok(Some(line)) => break PromptOutcome::Value(line),
            Ok(None) => break PromptOutcome::Cancelled,
            Err(RecvTimeoutError::Timeout) => {
                if Instant::now() >= deadline {
                    break PromptOutcome::TimedOut;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break PromptOutcome::Cancelled,
        }
    };

    let _ = term.clear_line();
    if outcome == PromptOutcome::TimedOut {
        let _ = term.write_line(&format!(
            "    {}",
            style("(no answer - continuing with the default)").dim()
        ));
    }
    outcome
}

/// Ask a yes/no question. Empty input and a timeout resolve to `default`;
/// unrecognized answers re-prompt.
pub fn ask_yes_no(prompt_text: &str, timeout: Duration, default: bool) -> Result<bool, Cancelled> {
    loop {
        match ask(prompt_text, timeout) {
            PromptOutcome::Value(text) => {
                let answer = text.trim().to_lowercase();
                if answer.is_empty() {
                    return Ok(default);
                }
                if YES_ALIASES.contains(&answer.as_str()) {
                    return Ok(true);
                }
                if NO_ALIASES.contains(&answer.as_str()) {
                    return Ok(false);
                }
                println!("    Please answer yes or no.");
            }
            PromptOutcome::TimedOut => return Ok(default),
            PromptOutcome::Cancelled => return Err(Cancelled),
        }
    }
}

/// Read one line with no deadline, e.g. for pager navigation. `Err` means
/// the input ended or the session was interrupted.
pub fn read_line_blocking() -> Result<String, Cancelled> {
    let rx = STDIN_LINES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    loop {
        if INTERRUPTED.load(Ordering::SeqCst) {
            return Err(Cancelled);
        }
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(Some(line)) => return Ok(line),
            Ok(None) | Err(RecvTimeoutError::Disconnected) => return Err(Cancelled),
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}

fn format_timeout(timeout: Duration) -> String {
    let secs = timeout.as_secs();
    if secs >= 120 && secs % 60 == 0 {
        format!("{} minutes", secs / 60)
    } else {
        format!("{} seconds", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timeout() {
        assert_eq!(format_timeout(Duration::from_secs(60)), "60 seconds");
        assert_eq!(format_timeout(Duration::from_secs(300)), "5 minutes");
        assert_eq!(format_timeout(Duration::from_secs(90)), "90 seconds");
    }
}
