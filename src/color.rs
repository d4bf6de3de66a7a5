use {
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// One of the six color identities a deck can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl Color {
    /// In WUBRG order, colorless last. This is also bit order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    pub const fn flag(self) -> ColorSet {
        match self {
            Color::White => ColorSet::WHITE,
            Color::Blue => ColorSet::BLUE,
            Color::Black => ColorSet::BLACK,
            Color::Red => ColorSet::RED,
            Color::Green => ColorSet::GREEN,
            Color::Colorless => ColorSet::COLORLESS,
        }
    }
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Colorless => 'C',
        }
    }
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Colorless => "colorless",
        }
    }
    fn from_symbol(ch: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.symbol() == ch.to_ascii_uppercase())
    }
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "colourless" => Some(Color::Colorless),
            lower => Self::ALL.into_iter().find(|color| color.name() == lower),
        }
    }
}

bitflags::bitflags! {
    /// Color identity of a deck.
    ///
    /// Stored as the raw bitmask, bit 0 being white and bit 5 colorless.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorSet: u8 {
        const WHITE = 1 << 0;
        const BLUE = 1 << 1;
        const BLACK = 1 << 2;
        const RED = 1 << 3;
        const GREEN = 1 << 4;
        const COLORLESS = 1 << 5;
    }
}

/// What a color indicator gets drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Yellow,
    Blue,
    Gray,
    Red,
    Green,
    White,
    /// Multicolored or empty sets
    Brown,
}

impl ColorSet {
    pub const NONE: Self = Self::empty();

    pub fn is_superset_of(self, other: Self) -> bool {
        self.contains(other)
    }
    pub fn is_subset_of(self, other: Self) -> bool {
        other.contains(self)
    }
    pub fn has(self, color: Color) -> bool {
        self.contains(color.flag())
    }
    pub fn toggle_color(&mut self, color: Color) {
        self.toggle(color.flag());
    }
    /// The colors in this set, in WUBRG order
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |color| self.has(*color))
    }
    /// Single colors get their own swatch. Anything else is brown, including the empty set,
    /// even though it is technically a subset of white.
    pub fn swatch(self) -> Swatch {
        let mut colors = self.colors();
        match (colors.next(), colors.next()) {
            (Some(color), None) => match color {
                Color::White => Swatch::Yellow,
                Color::Blue => Swatch::Blue,
                Color::Black => Swatch::Gray,
                Color::Red => Swatch::Red,
                Color::Green => Swatch::Green,
                Color::Colorless => Swatch::White,
            },
            _ => Swatch::Brown,
        }
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::NONE
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |set, color| set | color.flag())
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for color in self.colors() {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Unknown color: {0}")]
    Unknown(String),
}

impl FromStr for ColorSet {
    type Err = ColorParseError;

    /// Accepts symbol runs (`"wu"`), names (`"red blue"`), or a mix,
    /// separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut colors = Vec::new();
        for word in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|word| !word.is_empty())
        {
            if word.eq_ignore_ascii_case("none") {
                continue;
            }
            if let Some(color) = Color::from_name(word) {
                colors.push(color);
                continue;
            }
            for ch in word.chars() {
                colors.push(
                    Color::from_symbol(ch).ok_or_else(|| ColorParseError::Unknown(word.into()))?,
                );
            }
        }
        Ok(colors.into_iter().collect())
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ColorSet {
    /// Bits outside of the six defined colors are dropped
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        let bits = raw & u64::from(Self::all().bits());
        Ok(Self::from_bits_truncate(bits as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superset_and_subset() {
        let azorius = ColorSet::WHITE | ColorSet::BLUE;
        assert!(azorius.is_superset_of(ColorSet::WHITE));
        assert!(azorius.is_superset_of(ColorSet::NONE));
        assert!(!azorius.is_superset_of(ColorSet::RED));
        assert!(ColorSet::BLUE.is_subset_of(azorius));
        assert!(ColorSet::all().is_superset_of(azorius));
        assert_eq!(ColorSet::all().bits(), 0b11_1111);
    }

    #[test]
    fn parse() {
        assert_eq!("wu".parse::<ColorSet>(), Ok(ColorSet::WHITE | ColorSet::BLUE));
        assert_eq!("R, g".parse::<ColorSet>(), Ok(ColorSet::RED | ColorSet::GREEN));
        assert_eq!("black colourless".parse::<ColorSet>(), Ok(ColorSet::BLACK | ColorSet::COLORLESS));
        assert_eq!("".parse::<ColorSet>(), Ok(ColorSet::NONE));
        assert_eq!("none".parse::<ColorSet>(), Ok(ColorSet::NONE));
        assert_eq!("wubrgc".parse::<ColorSet>(), Ok(ColorSet::all()));
        assert_eq!("ww".parse::<ColorSet>(), Ok(ColorSet::WHITE));
        assert_eq!(
            "wx".parse::<ColorSet>(),
            Err(ColorParseError::Unknown("wx".into()))
        );
    }

    #[test]
    fn display_in_wubrg_order() {
        let set = ColorSet::COLORLESS | ColorSet::GREEN | ColorSet::WHITE;
        assert_eq!(set.to_string(), "WGC");
        assert_eq!(ColorSet::NONE.to_string(), "-");
    }

    #[test]
    fn swatches() {
        assert_eq!(ColorSet::WHITE.swatch(), Swatch::Yellow);
        assert_eq!(ColorSet::BLACK.swatch(), Swatch::Gray);
        assert_eq!(ColorSet::COLORLESS.swatch(), Swatch::White);
        assert_eq!((ColorSet::RED | ColorSet::GREEN).swatch(), Swatch::Brown);
        assert_eq!(ColorSet::NONE.swatch(), Swatch::Brown);
    }

    #[test]
    fn serializes_as_bitmask() {
        assert_eq!(serde_json::to_string(&ColorSet::RED).unwrap(), "8");
        let set: ColorSet = serde_json::from_str("3").unwrap();
        assert_eq!(set, ColorSet::WHITE | ColorSet::BLUE);
        // Unknown high bits never make it into the set
        let set: ColorSet = serde_json::from_str("72").unwrap();
        assert_eq!(set, ColorSet::RED);
        assert!(serde_json::from_str::<ColorSet>("-1").is_err());
    }
}
