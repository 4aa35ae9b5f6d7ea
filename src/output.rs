use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Remove any previous output tree and recreate the root empty. Called once
/// per run, before any class is processed.
pub fn clear_output_dir(root: &Path) -> Result<()> {
    if root.exists() {
        fs::remove_dir_all(root)
            .with_context(|| format!("Failed to clear output dir {}", root.display()))?;
    }
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create output dir {}", root.display()))?;
    Ok(())
}

/// Write one `{class}_part_{n}.md` file per chunk (1-based) under a
/// per-class subdirectory, overwriting existing files. Returns the count.
pub fn save_chunks(root: &Path, class_name: &str, chunks: &[String]) -> Result<usize> {
    let folder = root.join(class_name);
    fs::create_dir_all(&folder)
        .with_context(|| format!("Failed to create {}", folder.display()))?;

    for (i, chunk) in chunks.iter().enumerate() {
        let path = folder.join(format!("{}_part_{}.md", class_name, i + 1));
        fs::write(&path, chunk).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    info!("Saved {} chunks to {}", chunks.len(), folder.display());
    Ok(chunks.len())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_removes_previous_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        fs::create_dir_all(root.join("Stale")).unwrap();
        fs::write(root.join("Stale/Stale_part_1.md"), "old run").unwrap();

        clear_output_dir(&root).unwrap();

        assert!(root.exists());
        assert!(!root.join("Stale").exists());
    }

    #[test]
    fn writes_one_file_per_chunk_with_1_based_index() {
        let dir = tempfile::tempdir().unwrap();
        let chunks = vec!["first".to_string(), "second".to_string()];

        let written = save_chunks(dir.path(), "Node", &chunks).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("Node/Node_part_1.md")).unwrap(),
            "first"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("Node/Node_part_2.md")).unwrap(),
            "second"
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        save_chunks(dir.path(), "Node", &["old".to_string()]).unwrap();
        save_chunks(dir.path(), "Node", &["new".to_string()]).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("Node/Node_part_1.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn empty_chunk_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_chunks(dir.path(), "Node", &[]).unwrap();
        assert_eq!(written, 0);
        assert!(fs::read_dir(dir.path().join("Node")).unwrap().next().is_none());
    }
}
