// Card model - the movable, resizable blocks that make up a bento page

use crate::grid::span::{CellRect, GridPosition, Span};
use crate::grid::traits::Occupant;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const CARD_ID_LEN: usize = 21;

/// Unique, stable card identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        let id: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(CARD_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The block types a page can be composed of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Image,
    Text,
    Multi,
    Form,
    Music,
    Scheduling,
}

impl CardKind {
    pub const ALL: [CardKind; 6] = [
        CardKind::Image,
        CardKind::Text,
        CardKind::Multi,
        CardKind::Form,
        CardKind::Music,
        CardKind::Scheduling,
    ];

    /// Span a freshly created card of this kind starts with
    pub fn default_span(&self) -> Span {
        match self {
            CardKind::Text => Span::new(2, 1),
            _ => Span::new(2, 2),
        }
    }

    /// Content a freshly created card of this kind starts with
    pub fn default_content(&self) -> CardContent {
        let (title, description, background) = match self {
            CardKind::Image => ("Image/Video", "", "#6366f1"),
            CardKind::Text => (
                "Text block",
                "Click to edit this text block and add your own content.",
                "#1e293b",
            ),
            CardKind::Multi => ("Multi-links", "Block with several links", "#4c1d95"),
            CardKind::Form => (
                "Contact us",
                "Send us a message and we will get back to you quickly",
                "#0f766e",
            ),
            CardKind::Music => ("Music", "", "#be123c"),
            CardKind::Scheduling => ("Book a meeting", "", "#0369a1"),
        };
        CardContent {
            title: title.to_string(),
            description: description.to_string(),
            url: String::new(),
            background_color: background.to_string(),
            text_color: "#ffffff".to_string(),
        }
    }

    /// Single-character label used by the debug grid view
    pub fn glyph(&self) -> char {
        match self {
            CardKind::Image => 'I',
            CardKind::Text => 'T',
            CardKind::Multi => 'L',
            CardKind::Form => 'F',
            CardKind::Music => 'M',
            CardKind::Scheduling => 'S',
        }
    }
}

/// Display content carried by a card. Opaque to the layout engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    pub title: String,
    pub description: String,
    pub url: String,
    pub background_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub size: Span,
    /// Absent while the card is not placed on the grid (auto-flow)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_position: Option<GridPosition>,
    pub content: CardContent,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            size: kind.default_span(),
            grid_position: None,
            content: kind.default_content(),
        }
    }

    pub fn with_size(mut self, size: Span) -> Self {
        self.size = size;
        self
    }

    pub fn at(mut self, position: GridPosition) -> Self {
        self.grid_position = Some(position);
        self
    }

    pub fn is_placed(&self) -> bool {
        self.grid_position.is_some()
    }

    /// Occupied rect, `None` while unplaced
    pub fn rect(&self) -> Option<CellRect> {
        self.grid_position.map(|position| CellRect::new(position, self.size))
    }

    /// Merge a patch into this card, returning whether anything changed
    pub fn apply(&mut self, patch: &CardPatch) -> bool {
        let mut changed = false;
        if let Some(size) = patch.size {
            changed |= self.size != size;
            self.size = size;
        }
        if let Some(position) = patch.grid_position {
            changed |= self.grid_position != Some(position);
            self.grid_position = Some(position);
        }
        changed
    }

    /// This card with a patch applied, leaving `self` untouched
    pub fn patched(&self, patch: &CardPatch) -> Card {
        let mut card = self.clone();
        card.apply(patch);
        card
    }
}

impl Occupant for Card {
    fn occupant_id(&self) -> &CardId {
        &self.id
    }

    fn occupied_rect(&self) -> Option<CellRect> {
        self.rect()
    }
}

/// Partial update to a card's layout fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardPatch {
    pub size: Option<Span>,
    pub grid_position: Option<GridPosition>,
}

impl CardPatch {
    pub fn size(size: Span) -> Self {
        Self {
            size: Some(size),
            grid_position: None,
        }
    }

    pub fn position(position: GridPosition) -> Self {
        Self {
            size: None,
            grid_position: Some(position),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.grid_position.is_none()
    }
}
