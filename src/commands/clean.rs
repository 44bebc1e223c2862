//! Remove local interaction state

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::interactions::STATE_DIR;

/// Delete the state directory, likes included
pub fn run(base_dir: &Path) -> Result<()> {
    let state_dir = base_dir.join(STATE_DIR);
    if state_dir.exists() {
        fs::remove_dir_all(&state_dir)?;
        tracing::info!("Deleted: {:?}", state_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::LikeLedger;

    #[test]
    fn test_clean_removes_likes() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = LikeLedger::new();
        ledger.toggle("1");
        ledger.save(dir.path()).unwrap();

        run(dir.path()).unwrap();
        assert!(!dir.path().join(STATE_DIR).exists());
        assert!(LikeLedger::load(dir.path()).liked.is_empty());

        // Nothing to clean is fine
        run(dir.path()).unwrap();
    }
}
