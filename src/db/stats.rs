use crate::core::ledger::{TOTAL_KEY, WEEKLY_KEY};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(expand_tilde(db_path))
        .map(|m| m.len())
        .unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORE KEYS
    //
    let entries = pool.store().entries()?;
    println!(
        "{}• Stored keys:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );

    // ledger keys always shown, anything else only when present
    for key in [WEEKLY_KEY, TOTAL_KEY] {
        let shown = entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"));
        println!("    {}: {}", key, shown);
    }
    for (key, value) in entries
        .iter()
        .filter(|(k, _)| k != WEEKLY_KEY && k != TOTAL_KEY)
    {
        println!("    {}: {}", key, value);
    }

    //
    // 3) LOG ENTRIES
    //
    let logs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, logs, RESET);

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM log ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "    last: {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
