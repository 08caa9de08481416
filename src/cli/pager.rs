//! Paginated listing of discovered notebooks.
//!
//! The page arithmetic and navigation transitions are pure functions; only
//! [`browse`] touches the terminal, so the invariants (clamped page index,
//! no prompt on a single page) are testable without a TTY.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use console::style;

use crate::cli::prompt::{self, Cancelled};
use crate::pipeline::workspace::FileEntry;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of the listing, recomputed on every navigation action.
#[derive(Debug, PartialEq)]
pub struct PageView<'a> {
    pub page_index: usize,
    pub page_count: usize,
    pub entries: &'a [FileEntry],
    /// 1-based global index of the first entry on this page.
    pub first_index: usize,
}

impl PageView<'_> {
    pub fn is_last(&self) -> bool {
        self.page_index + 1 == self.page_count
    }
}

/// Navigation command for non-final pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    Continue,
}

impl NavCommand {
    /// Empty input continues. Unrecognized input returns `None` and the
    /// loop re-prompts.
    pub fn parse(input: &str) -> Option<NavCommand> {
        match input.trim().to_lowercase().as_str() {
            "n" | "next" => Some(NavCommand::Next),
            "p" | "prev" | "previous" => Some(NavCommand::Previous),
            "" | "c" | "continue" => Some(NavCommand::Continue),
            _ => None,
        }
    }

    /// Apply to a page index, clamped to `[0, page_count - 1]`.
    pub fn apply(self, page_index: usize, page_count: usize) -> usize {
        match self {
            NavCommand::Next => (page_index + 1).min(page_count.saturating_sub(1)),
            NavCommand::Previous => page_index.saturating_sub(1),
            NavCommand::Continue => page_index,
        }
    }
}

/// Number of pages needed for `total` entries. Never zero.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Compute the page at `page_index`, clamping it into range.
pub fn view(entries: &[FileEntry], page_index: usize, page_size: usize) -> PageView<'_> {
    let pages = page_count(entries.len(), page_size);
    let page_index = page_index.min(pages - 1);
    let start = (page_index * page_size).min(entries.len());
    let end = (start + page_size).min(entries.len());
    PageView {
        page_index,
        page_count: pages,
        entries: &entries[start..end],
        first_index: start + 1,
    }
}

/// Show all entries page by page. The loop exits exactly once: after the
/// final page is rendered, or when the user continues early.
pub fn browse(entries: &[FileEntry], page_size: usize) -> Result<(), Cancelled> {
    let pages = page_count(entries.len(), page_size);
    let mut page_index = 0;

    loop {
        let current = view(entries, page_index, page_size);
        render_page(&current);

        if current.is_last() {
            return Ok(());
        }

        println!();
        println!("    Navigation: [N]ext | [P]revious | [Enter] Continue");
        let line = prompt::read_line_blocking()?;
        match NavCommand::parse(&line) {
            Some(NavCommand::Continue) => return Ok(()),
            Some(command) => page_index = command.apply(page_index, pages),
            None => {}
        }
    }
}

fn render_page(page: &PageView<'_>) {
    println!();
    println!(
        "    {} {}",
        style("Files found").white().bold(),
        style(format!("(Page {}/{})", page.page_index + 1, page.page_count)).dim()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Notebook").add_attribute(Attribute::Bold),
        Cell::new("Size (MB)").add_attribute(Attribute::Bold),
    ]);

    for (offset, entry) in page.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(page.first_index + offset).set_alignment(CellAlignment::Right),
            Cell::new(&entry.name),
            Cell::new(format!("{:.2}", entry.size_mb())).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}
