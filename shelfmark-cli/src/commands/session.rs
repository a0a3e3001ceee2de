//! Session command implementation
//!
//! Interactive stopwatch: runs until the user presses Enter, then asks how
//! many pages were read and credits them against the tracked book. The
//! credit is capped at the pages remaining; the store itself stays
//! unclamped.

use anyhow::{bail, Context, Result};
use shelfmark_core::session::pages_to_credit;
use shelfmark_core::ReadingSession;
use std::io::{BufRead, Write};
use std::path::Path;

/// Time a reading session for a tracked book
pub async fn session(data_dir: &Path, id: &str) -> Result<()> {
    let store = super::open_store(data_dir).await;

    let Some(tracked) = store.books().await.into_iter().find(|t| t.book.id == id) else {
        bail!("No book with id {} in your reading list", id);
    };

    println!("Reading: {}", super::describe(&tracked.book));
    match tracked.book.info.page_count {
        Some(total) => println!("Starting at page {}/{}", tracked.current_page, total),
        None => println!("Starting at page {}", tracked.current_page),
    }
    println!("Press Enter to end the session.");

    let session = ReadingSession::start();
    read_line().context("Failed to read from stdin")?;
    println!("Session time: {}", session.format_elapsed());

    print!("Pages read this session: ");
    std::io::stdout().flush()?;
    let input = read_line().context("Failed to read from stdin")?;

    let pages_read: i64 = match input.trim().parse() {
        Ok(pages) => pages,
        Err(_) => {
            println!("No pages recorded");
            return Ok(());
        }
    };

    let credit = pages_to_credit(
        pages_read,
        tracked.current_page,
        tracked.book.info.page_count,
    );
    if credit == 0 {
        println!("No pages recorded");
        return Ok(());
    }

    let new_page = tracked.current_page + credit;
    store.update_progress(&tracked.book, new_page).await;
    match tracked.book.info.page_count {
        Some(total) if total > 0 => println!(
            "Now at page {}/{} ({:.0}%)",
            new_page,
            total,
            new_page as f64 / total as f64 * 100.0
        ),
        _ => println!("Now at page {}", new_page),
    }
    Ok(())
}

fn read_line() -> std::io::Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
