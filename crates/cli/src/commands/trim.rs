use anyhow::Result;
use log::debug;
use piatto_core::Watcher;

use crate::cli::TrimArgs;

/// Trim once, or keep re-trimming at the watch interval until interrupted.
pub fn run_trim(args: &TrimArgs) -> Result<()> {
    let options = args.options();
    debug!("Trim options: {options:?}");

    let mut watcher = Watcher::new(options)?;
    match args.watch {
        Some(interval) => watcher.watch(interval),
        None => {
            watcher.run_once()?;
            Ok(())
        }
    }
}
