use roster_common::config::Config;

use crate::commands::list;
use crate::terminal::format;

pub fn show(id: &str, cfg: &Config) -> anyhow::Result<()> {
    let store = list::load_store(cfg)?;

    match store.position(id) {
        Some(idx) => {
            format::print_record(idx + 1, &store.list()[idx]);
            Ok(())
        }
        None => anyhow::bail!("student with ID '{id}' not found"),
    }
}
