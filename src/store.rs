use {
    crate::{
        deck::{self, Deck, TagSet},
        serialization::{self, ReadError},
    },
    fnv::FnvHashSet,
    serde_derive::{Deserialize, Serialize},
    std::{
        io,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

/// All the decks, and the document they live in.
///
/// Every mutation is written through to disk immediately.
/// If a write fails, the in-memory state stays authoritative until the next successful save.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct DeckStore {
    /// In insertion order
    decks: Vec<Deck>,
    #[serde(skip)]
    path: PathBuf,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read deck file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to decode deck file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Deck id {0} appears more than once")]
    DuplicateId(deck::Id),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl From<ReadError> for LoadError {
    fn from(src: ReadError) -> Self {
        match src {
            ReadError::Io(e) => Self::Io(e),
            ReadError::Json(e) => Self::Json(e),
        }
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Couldn't write to save file: {0}")]
    Io(#[from] io::Error),
    #[error("Couldn't encode decks: {0}")]
    Json(#[from] serde_json::Error),
}

impl DeckStore {
    pub fn new_empty(path: PathBuf) -> Self {
        Self {
            decks: Vec::new(),
            path,
        }
    }
    /// Load the document at `path`. Any bad record fails the whole load.
    pub fn load_from(path: PathBuf) -> Result<Self, LoadError> {
        let mut store: Self = serialization::read_from_file(&path)?;
        let mut seen = FnvHashSet::default();
        for deck in &store.decks {
            if !seen.insert(deck.id) {
                return Err(LoadError::DuplicateId(deck.id));
            }
        }
        store.path = path;
        Ok(store)
    }
    /// Like [`Self::load_from`], but a missing or undecodable document is just `None`
    pub fn load(path: PathBuf) -> Option<Self> {
        match Self::load_from(path) {
            Ok(store) => Some(store),
            Err(e) if e.is_not_found() => {
                log::debug!("No deck file yet, starting empty");
                None
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
    /// What the application does at startup.
    ///
    /// Loads the document or starts empty, then saves once so the document exists.
    /// An undecodable document is moved aside to `<path>.bak` first instead of being overwritten.
    /// If it can't be moved aside, the startup save is skipped and the document is left alone
    /// until the next explicit change.
    pub fn open(path: PathBuf) -> Self {
        let (store, may_save) = match Self::load_from(path.clone()) {
            Ok(store) => (store, true),
            Err(e) if e.is_not_found() => {
                log::debug!("No deck file at {}, starting empty", path.display());
                (Self::new_empty(path), true)
            }
            Err(e) => {
                log::warn!("{e}, starting empty");
                let backed_up = match back_up_corrupt(&path) {
                    Ok(backup) => {
                        log::warn!("Moved undecodable deck file to {}", backup.display());
                        true
                    }
                    Err(e) => {
                        log::error!("Failed to back up undecodable deck file, leaving it be: {e}");
                        false
                    }
                };
                (Self::new_empty(path), backed_up)
            }
        };
        // Already logged by `save`, and there is nothing else to do about it at startup
        if may_save && store.save().is_err() {
            log::warn!("Starting with an unsaved collection");
        }
        store
    }
    /// Write the whole collection out, replacing the previous document.
    ///
    /// Failures are logged here, and the error is handed back for anyone who wants to report it.
    pub fn save(&self) -> Result<(), SaveError> {
        let result = self.try_save();
        if let Err(e) = &result {
            log::error!("{e}");
        }
        result
    }
    fn try_save(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let bytes = serialization::to_bytes(self)?;
        serialization::write_whole_file(&self.path, &bytes)?;
        Ok(())
    }
    /// Replace the deck with the same id in place, or append it if it's new. Then save.
    pub fn upsert(&mut self, deck: Deck) -> Result<(), SaveError> {
        match self.decks.iter_mut().find(|en| en.id == deck.id) {
            Some(existing) => {
                log::debug!("Replacing deck {}", deck.id);
                *existing = deck;
            }
            None => {
                log::debug!("Adding deck {}", deck.id);
                self.decks.push(deck);
            }
        }
        self.save()
    }
    /// Remove the deck with this id if there is one. Then save.
    pub fn remove(&mut self, id: deck::Id) -> Result<(), SaveError> {
        let len_before = self.decks.len();
        self.decks.retain(|deck| deck.id != id);
        if self.decks.len() != len_before {
            log::debug!("Removed deck {id}");
        }
        self.save()
    }
    /// The id a newly created deck should get
    pub fn next_id(&self) -> deck::Id {
        self.decks.iter().map(|deck| deck.id).max().map_or(1, |max| max + 1)
    }
    /// Every tag used by any deck
    pub fn tags(&self) -> TagSet {
        self.decks
            .iter()
            .flat_map(|deck| deck.tags.iter().cloned())
            .collect()
    }
    pub fn sorted_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tags().into_iter().collect();
        tags.sort_unstable();
        tags
    }
    pub fn get(&self, id: deck::Id) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }
    pub fn len(&self) -> usize {
        self.decks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
    /// Where the collection is persisted. This is what gets shared for a whole-collection export.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Moves `path` to `<path>.bak`. An existing backup is never replaced.
fn back_up_corrupt(path: &Path) -> io::Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    if backup.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", backup.display()),
        ));
    }
    std::fs::rename(path, &backup)?;
    Ok(backup)
}
