use {
    crate::color::ColorSet,
    fnv::FnvHashSet,
    serde_derive::{Deserialize, Serialize},
};

pub type TagSet = FnvHashSet<String>;

/// Identifies a deck within a store. Never reused while the deck exists.
pub type Id = u64;

const STARTER_PREFIX: &str = "[S] ";
const BRAWL_PREFIX: &str = "[B] ";
pub const STARTER_TAG: &str = "Starter";
pub const BRAWL_TAG: &str = "Brawl";

/// A saved deck list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "Record")]
pub struct Deck {
    pub id: Id,
    pub name: String,
    /// Color identity
    pub colors: ColorSet,
    /// The card list in whatever format it was pasted. We never look inside.
    pub contents: String,
    pub tags: TagSet,
}

/// A deck as it is found on disk, before normalization
#[derive(Deserialize)]
struct Record {
    id: Id,
    name: String,
    colors: ColorSet,
    contents: String,
    #[serde(default)]
    tags: TagSet,
}

impl From<Record> for Deck {
    fn from(record: Record) -> Self {
        let mut deck = Deck {
            id: record.id,
            name: record.name,
            colors: record.colors,
            contents: record.contents,
            tags: record.tags,
        };
        deck.migrate_legacy_prefixes();
        deck
    }
}

impl Deck {
    /// A fresh deck holding `contents`, to be filled in by the user
    pub fn from_contents(id: Id, contents: String) -> Self {
        Self {
            id,
            name: String::new(),
            colors: ColorSet::NONE,
            contents,
            tags: TagSet::default(),
        }
    }
    /// Old versions marked starter and brawl decks with a name prefix instead of a tag.
    ///
    /// Starter is checked first, so `"[S] [B] Foo"` loses both.
    fn migrate_legacy_prefixes(&mut self) {
        for (prefix, tag) in [(STARTER_PREFIX, STARTER_TAG), (BRAWL_PREFIX, BRAWL_TAG)] {
            if let Some(stripped) = self.name.strip_prefix(prefix) {
                self.name = stripped.to_owned();
                self.tags.insert(tag.to_owned());
            }
        }
    }
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
    /// Tags in ascending order, for presentation
    pub fn sorted_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Deck {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn starter_prefix_becomes_tag() {
        let deck = decode(r#"{"id":1,"name":"[S] Mono Red","colors":8,"contents":"1 Shock","tags":[]}"#);
        assert_eq!(deck.id, 1);
        assert_eq!(deck.name, "Mono Red");
        assert_eq!(deck.colors, ColorSet::RED);
        assert_eq!(deck.contents, "1 Shock");
        assert_eq!(deck.sorted_tags(), ["Starter"]);
    }

    #[test]
    fn brawl_prefix_becomes_tag() {
        let deck = decode(r#"{"id":4,"name":"[B] Korvold","colors":28,"contents":"","tags":["Historic"]}"#);
        assert_eq!(deck.name, "Korvold");
        assert_eq!(deck.sorted_tags(), ["Brawl", "Historic"]);
    }

    #[test]
    fn both_prefixes_in_order() {
        let deck = decode(r#"{"id":1,"name":"[S] [B] Both","colors":0,"contents":""}"#);
        assert_eq!(deck.name, "Both");
        assert_eq!(deck.sorted_tags(), ["Brawl", "Starter"]);
        // Brawl first doesn't strip the starter prefix that follows it
        let deck = decode(r#"{"id":1,"name":"[B] [S] Both","colors":0,"contents":""}"#);
        assert_eq!(deck.name, "[S] Both");
        assert_eq!(deck.sorted_tags(), ["Brawl"]);
    }

    #[test]
    fn prefix_must_match_exactly() {
        for name in ["[S]Mono Red", "[s] Mono Red", " [S] Mono Red", "Mono [S] Red"] {
            let json = format!(r#"{{"id":1,"name":"{name}","colors":8,"contents":""}}"#);
            let deck = decode(&json);
            assert_eq!(deck.name, name);
            assert!(deck.tags.is_empty());
        }
    }

    #[test]
    fn migration_is_not_reapplied() {
        let deck = decode(r#"{"id":1,"name":"[S] Mono Red","colors":8,"contents":""}"#);
        let mut deck = deck;
        deck.tags.clear();
        let json = serde_json::to_string(&deck).unwrap();
        let reloaded = decode(&json);
        assert_eq!(reloaded.name, "Mono Red");
        assert!(reloaded.tags.is_empty());
    }

    #[test]
    fn tags_are_optional() {
        let deck = decode(r#"{"id":9,"name":"Izzet","colors":10,"contents":"4 Opt"}"#);
        assert!(deck.tags.is_empty());
    }

    #[test]
    fn required_fields() {
        for json in [
            r#"{"name":"x","colors":0,"contents":""}"#,
            r#"{"id":1,"colors":0,"contents":""}"#,
            r#"{"id":1,"name":"x","contents":""}"#,
            r#"{"id":1,"name":"x","colors":0}"#,
        ] {
            assert!(serde_json::from_str::<Deck>(json).is_err(), "{json}");
        }
    }

    #[test]
    fn from_contents_is_blank() {
        let deck = Deck::from_contents(3, "4 Lightning Bolt".into());
        assert_eq!(deck.id, 3);
        assert!(deck.name.is_empty());
        assert_eq!(deck.colors, ColorSet::NONE);
        assert!(deck.tags.is_empty());
        assert_eq!(deck.contents, "4 Lightning Bolt");
    }
}
