use anyhow::Context;
use colored::*;
use roster_common::config::Config;
use roster_common::warn;
use roster_core::store::RecordStore;
use roster_core::{FileRepository, RecordRepository};

use crate::terminal::{format, print};

pub fn list(cfg: &Config) -> anyhow::Result<()> {
    let store = load_store(cfg)?;
    print_all(&store, cfg);
    Ok(())
}

/// Reads the data file without opening a session, so nothing is written back.
pub fn load_store(cfg: &Config) -> anyhow::Result<RecordStore> {
    let repo = FileRepository::new(&cfg.data_file);
    let loaded = repo
        .load()
        .with_context(|| format!("failed to load roster from {}", repo.location()))?;

    if loaded.discarded_lines > 0 {
        warn!(
            "{} trailing line(s) in {} do not form a complete record and were ignored",
            loaded.discarded_lines,
            repo.location()
        );
    }

    Ok(RecordStore::from_records(loaded.records)?)
}

pub fn print_all(store: &RecordStore, cfg: &Config) {
    if store.is_empty() {
        print::no_results();
        return;
    }

    format::print_table(store.list());

    if cfg.quiet < 2 {
        print::fat_separator();
        let total: ColoredString = store.len().to_string().bold().green();
        print::centerln(&format!("Total Students: {total}"));
    }
}
