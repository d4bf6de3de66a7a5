use crate::{
    color::{Color, ColorSet},
    deck::{Deck, TagSet},
};

/// The decks that should be shown.
///
/// An inactive filter shows everything. An active one shows decks that have all of
/// `tags` and all of `colors`, so empty requirements let everything through.
/// Input order is kept.
pub fn visible<'a>(
    decks: &'a [Deck],
    tags: &'a TagSet,
    colors: ColorSet,
    active: bool,
) -> impl Iterator<Item = &'a Deck> + 'a {
    decks
        .iter()
        .filter(move |deck| !active || satisfies(deck, tags, colors))
}

fn satisfies(deck: &Deck, tags: &TagSet, colors: ColorSet) -> bool {
    deck.tags.is_superset(tags) && deck.colors.is_superset_of(colors)
}

/// The filter the user builds up by toggling tags and colors
#[derive(Default, Debug)]
pub struct FilterState {
    active: bool,
    pub tags: TagSet,
    pub colors: ColorSet,
}

impl FilterState {
    pub fn active(&self) -> bool {
        self.active
    }
    /// Switching the filter on or off always starts from a clean slate
    pub fn toggle_active(&mut self) {
        self.clear();
        self.active ^= true;
    }
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.toggle_active();
        }
    }
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_owned());
        }
    }
    pub fn toggle_color(&mut self, color: Color) {
        self.colors.toggle_color(color);
    }
    pub fn clear_colors(&mut self) {
        self.colors = ColorSet::NONE;
    }
    pub fn clear(&mut self) {
        self.tags.clear();
        self.clear_colors();
    }
    pub fn apply<'a>(&'a self, decks: &'a [Deck]) -> impl Iterator<Item = &'a Deck> + 'a {
        visible(decks, &self.tags, self.colors, self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(id: u64, colors: ColorSet, tags: &[&str]) -> Deck {
        Deck {
            id,
            name: format!("deck{id}"),
            colors,
            contents: String::new(),
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
        }
    }

    fn sample() -> Vec<Deck> {
        vec![
            deck(1, ColorSet::WHITE | ColorSet::BLUE, &["Standard"]),
            deck(2, ColorSet::RED, &["Standard", "Starter"]),
            deck(3, ColorSet::RED | ColorSet::GREEN, &[]),
            deck(4, ColorSet::all(), &["Brawl"]),
        ]
    }

    fn ids<'a>(decks: impl Iterator<Item = &'a Deck>) -> Vec<u64> {
        decks.map(|d| d.id).collect()
    }

    fn tag_set(tags: &[&str]) -> TagSet {
        tags.iter().map(|&t| t.to_owned()).collect()
    }

    #[test]
    fn inactive_shows_everything() {
        let decks = sample();
        let tags = tag_set(&["Nothing has this"]);
        assert_eq!(ids(visible(&decks, &tags, ColorSet::all(), false)), [1, 2, 3, 4]);
    }

    #[test]
    fn empty_filter_is_vacuous() {
        let decks = sample();
        let tags = TagSet::default();
        assert_eq!(ids(visible(&decks, &tags, ColorSet::NONE, true)), [1, 2, 3, 4]);
    }

    #[test]
    fn by_tag() {
        let decks = sample();
        assert_eq!(ids(visible(&decks, &tag_set(&["Standard"]), ColorSet::NONE, true)), [1, 2]);
        assert_eq!(
            ids(visible(&decks, &tag_set(&["Standard", "Starter"]), ColorSet::NONE, true)),
            [2]
        );
    }

    #[test]
    fn by_color_is_superset() {
        let decks = sample();
        let none = TagSet::default();
        assert_eq!(ids(visible(&decks, &none, ColorSet::RED, true)), [2, 3, 4]);
        assert_eq!(
            ids(visible(&decks, &none, ColorSet::RED | ColorSet::GREEN, true)),
            [3, 4]
        );
        assert_eq!(
            ids(visible(&decks, &tag_set(&["Standard"]), ColorSet::RED, true)),
            [2]
        );
    }

    #[test]
    fn toggling_active_clears() {
        let decks = sample();
        let mut filter = FilterState::default();
        filter.toggle_active();
        filter.toggle_tag("Standard");
        filter.toggle_color(Color::Red);
        assert_eq!(ids(filter.apply(&decks)), [2]);
        filter.toggle_active();
        assert!(!filter.active());
        assert!(filter.tags.is_empty());
        assert_eq!(filter.colors, ColorSet::NONE);
        assert_eq!(ids(filter.apply(&decks)), [1, 2, 3, 4]);
    }

    #[test]
    fn toggle_tag_and_clear_colors() {
        let mut filter = FilterState::default();
        filter.set_active(true);
        filter.toggle_tag("Brawl");
        assert!(filter.has_tag("Brawl"));
        filter.toggle_tag("Brawl");
        assert!(!filter.has_tag("Brawl"));
        filter.toggle_tag("Brawl");
        filter.toggle_color(Color::Blue);
        filter.clear_colors();
        assert_eq!(filter.colors, ColorSet::NONE);
        assert!(filter.has_tag("Brawl"));
        assert!(filter.active());
    }
}
