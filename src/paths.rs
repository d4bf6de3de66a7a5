use {
    anyhow::Context,
    directories::ProjectDirs,
    std::path::{Path, PathBuf},
};

const FILENAME: &str = "decks.json";

/// Where the deck document lives.
///
/// Defaults to the per-user data directory, unless the caller knows better.
pub fn deck_file(data_dir_override: Option<&Path>) -> anyhow::Result<PathBuf> {
    let data_dir = match data_dir_override {
        Some(dir) => dir.to_owned(),
        None => ProjectDirs::from("", "deckshelf", "deckshelf")
            .context("Failed to retrieve project dirs")?
            .data_dir()
            .to_owned(),
    };
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;
    Ok(data_dir.join(FILENAME))
}

#[test]
fn override_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");
    let file = deck_file(Some(&data_dir)).unwrap();
    assert!(data_dir.is_dir());
    assert_eq!(file, data_dir.join("decks.json"));
}
