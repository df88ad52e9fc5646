//! The static symbol catalog.
//!
//! Each player is bound to one [`Category`] for a whole game. Every turn a
//! symbol is drawn from that category's list, so a player's marks look
//! different from one another but always belong to the same family.

use super::draw::SymbolDraw;
use super::error::GameError;
use super::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named group of interchangeable symbols.
///
/// Symbol lists are pairwise disjoint across categories, so a symbol
/// identifies its category unambiguously.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    /// Animal faces.
    Animals,
    /// Snacks and treats.
    Food,
    /// Balls of every sport.
    Sports,
    /// Plants and flowers.
    Nature,
    /// Rockets, planets and stars.
    Space,
    /// Gadgets.
    Tech,
}

const ANIMALS: &[&str] = &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];
const FOOD: &[&str] = &["🍕", "🍔", "🍟", "🌭", "🍿", "🧁", "🍩", "🍪"];
const SPORTS: &[&str] = &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🏉", "🎱"];
const NATURE: &[&str] = &["🌲", "🌵", "🌴", "🌻", "🌹", "🍀", "🍁", "🍄"];
const SPACE: &[&str] = &["🚀", "🛸", "🌍", "🌙", "⭐", "☄️", "🪐", "🌌"];
const TECH: &[&str] = &["💻", "📱", "⌨️", "🖥️", "🖱️", "💾", "📡", "🤖"];

impl Category {
    /// Every category in catalog order.
    pub const ALL: [Category; 6] = [
        Category::Animals,
        Category::Food,
        Category::Sports,
        Category::Nature,
        Category::Space,
        Category::Tech,
    ];

    /// The category a player is bound to before anyone picks one.
    pub const fn default_for(player: Player) -> Self {
        match player {
            Player::One => Category::Animals,
            Player::Two => Category::Food,
        }
    }

    /// The ordered symbol list of this category.
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Category::Animals => ANIMALS,
            Category::Food => FOOD,
            Category::Sports => SPORTS,
            Category::Nature => NATURE,
            Category::Space => SPACE,
            Category::Tech => TECH,
        }
    }

    /// Returns true if `glyph` is one of this category's symbols.
    pub fn contains(self, glyph: &str) -> bool {
        self.symbols().contains(&glyph)
    }

    /// Returns the symbol at `index`, if the category has one there.
    pub fn symbol(self, index: usize) -> Option<Symbol> {
        (index < self.symbols().len()).then_some(Symbol {
            category: self,
            index: index as u8,
        })
    }

    /// Finds the category owning `glyph`.
    pub fn of_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.contains(glyph))
    }

    /// Parses a category name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownCategory`] if no category has that name.
    #[instrument]
    pub fn from_name(name: &str) -> Result<Self, GameError> {
        name.trim().parse().map_err(|_| GameError::UnknownCategory {
            name: name.to_string(),
        })
    }

    /// Draws one symbol uniformly from this category.
    pub fn draw(self, source: &mut impl SymbolDraw) -> Symbol {
        let len = self.symbols().len();
        let index = source.draw(len).min(len - 1);
        Symbol {
            category: self,
            index: index as u8,
        }
    }
}

/// One symbol of the catalog, identified by its category and list index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Symbol {
    category: Category,
    index: u8,
}

impl Symbol {
    /// The category this symbol belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Position of the symbol in its category's list.
    pub fn index(&self) -> usize {
        usize::from(self.index)
    }

    /// The printable glyph.
    pub fn glyph(&self) -> &'static str {
        self.category
            .symbols()
            .get(self.index())
            .copied()
            .unwrap_or("?")
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
