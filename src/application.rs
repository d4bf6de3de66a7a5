use {
    crate::{
        clipboard::Clipboard,
        color::{Color, ColorSet},
        deck::{self, Deck},
        filter::FilterState,
        share::{Payload, ShareTarget},
        store::{DeckStore, SaveError},
    },
    anyhow::Context,
    std::path::PathBuf,
};

/// Everything a front end needs to show and change the deck collection.
///
/// Edits happen on a draft copy and only reach the store when committed.
pub struct Application {
    pub store: DeckStore,
    pub filter: FilterState,
    editing: Option<EditSession>,
    pending_delete: Option<deck::Id>,
}

/// A deck being edited. Nothing here touches the store until committed.
#[derive(Debug)]
pub struct EditSession {
    draft: Deck,
}

impl EditSession {
    fn new(draft: Deck) -> Self {
        Self { draft }
    }
    pub fn deck(&self) -> &Deck {
        &self.draft
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }
    pub fn set_colors(&mut self, colors: ColorSet) {
        self.draft.colors = colors;
    }
    pub fn toggle_color(&mut self, color: Color) {
        self.draft.colors.toggle_color(color);
    }
    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.draft.contents = contents.into();
    }
    /// Surrounding whitespace is trimmed. Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.draft.tags.insert(tag.to_owned())
    }
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.draft.tags.remove(tag.trim())
    }
}

impl Application {
    /// Load the collection at `path`, or start an empty one there
    pub fn open(path: PathBuf) -> Self {
        Self::with_store(DeckStore::open(path))
    }
    pub fn with_store(store: DeckStore) -> Self {
        Self {
            store,
            filter: FilterState::default(),
            editing: None,
            pending_delete: None,
        }
    }
    pub fn visible_decks(&self) -> impl Iterator<Item = &Deck> {
        self.filter.apply(self.store.decks())
    }
    /// All tags in use, sorted, for the filter bar
    pub fn tags(&self) -> Vec<String> {
        self.store.sorted_tags()
    }
    /// Start editing a brand new deck holding `text`.
    ///
    /// The id is allocated now, so it stays the same until the deck is committed.
    pub fn import_text(&mut self, text: String) -> &mut EditSession {
        let deck = Deck::from_contents(self.store.next_id(), text);
        log::debug!("Importing new deck {}", deck.id);
        self.editing.insert(EditSession::new(deck))
    }
    /// Like [`Self::import_text`], if the clipboard has text on it
    pub fn import_from_clipboard(
        &mut self,
        clipboard: &mut dyn Clipboard,
    ) -> Option<&mut EditSession> {
        let text = clipboard.get_text()?;
        Some(self.import_text(text))
    }
    pub fn begin_edit(&mut self, id: deck::Id) -> Option<&mut EditSession> {
        let deck = self.store.get(id)?.clone();
        Some(self.editing.insert(EditSession::new(deck)))
    }
    pub fn editing(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }
    /// Put the draft into the store, and save.
    ///
    /// Returns the id of the committed deck, or `None` if nothing was being edited.
    /// The store keeps the change even if saving fails.
    pub fn commit_edit(&mut self) -> Result<Option<deck::Id>, SaveError> {
        let Some(session) = self.editing.take() else {
            return Ok(None);
        };
        let id = session.draft.id;
        self.store.upsert(session.draft)?;
        Ok(Some(id))
    }
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
    /// Ask for a deck to be deleted. Returns the name to show in the confirmation prompt.
    pub fn request_delete(&mut self, id: deck::Id) -> &str {
        self.pending_delete = Some(id);
        self.store.get(id).map_or("Unknown", |deck| deck.name.as_str())
    }
    pub fn pending_delete(&self) -> Option<deck::Id> {
        self.pending_delete
    }
    pub fn confirm_delete(&mut self) -> Result<(), SaveError> {
        match self.pending_delete.take() {
            Some(id) => self.store.remove(id),
            None => Ok(()),
        }
    }
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }
    fn deck(&self, id: deck::Id) -> anyhow::Result<&Deck> {
        self.store
            .get(id)
            .with_context(|| format!("No deck with id {id}"))
    }
    /// Put a deck's card list on the clipboard, as is
    pub fn copy_contents(&self, id: deck::Id, clipboard: &mut dyn Clipboard) -> anyhow::Result<()> {
        clipboard.set_text(self.deck(id)?.contents.clone())
    }
    pub fn share_deck(&self, id: deck::Id, target: &mut dyn ShareTarget) -> anyhow::Result<()> {
        target.present(Payload::Text(self.deck(id)?.contents.clone()))
    }
    /// Hand over the whole collection document
    pub fn share_collection(&self, target: &mut dyn ShareTarget) -> anyhow::Result<()> {
        target.present(Payload::File(self.store.path().to_owned()))
    }
}
