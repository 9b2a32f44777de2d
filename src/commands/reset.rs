//! Forget saved progress

use crate::storage::{INTRO_KEY, KeyValueStore, discard_session};
use anyhow::{Context, Result};

/// Delete the stored session and the seen-intro flag
///
/// # Errors
///
/// Returns an error if the store cannot delete either key.
pub fn run_reset<S>(store: &mut S) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    discard_session(store).context("Failed to delete saved session")?;
    store
        .remove(INTRO_KEY)
        .context("Failed to delete intro flag")?;
    tracing::info!("Saved progress cleared");
    println!("🔄 Saved progress cleared");
    Ok(())
}
