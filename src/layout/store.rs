// In-memory layout store: one independent card collection per layout variant

use crate::card::{Card, CardId, CardKind, CardPatch};
use crate::config::{BentoConfig, GridConfig};
use crate::grid::collision::{find_free_position, first_collision};
use crate::grid::traits::{GridError, GridResult};
use crate::layout::{LayoutRepository, LayoutVariant};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub struct LayoutStore {
    config: BentoConfig,
    active: LayoutVariant,
    layouts: HashMap<LayoutVariant, Vec<Card>>,
    revision: u64,
}

/// Serializable view of every variant's cards, spans in "CxR" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub active: LayoutVariant,
    pub layouts: BTreeMap<LayoutVariant, Vec<Card>>,
}

impl LayoutStore {
    pub fn new(config: BentoConfig) -> Self {
        let layouts = LayoutVariant::ALL
            .into_iter()
            .map(|variant| (variant, Vec::new()))
            .collect();
        Self {
            config,
            active: LayoutVariant::default(),
            layouts,
            revision: 0,
        }
    }

    pub fn config(&self) -> &BentoConfig {
        &self.config
    }

    pub fn grid(&self, variant: LayoutVariant) -> &GridConfig {
        self.config.grid(variant)
    }

    /// Grid bounds of the active variant
    pub fn active_grid(&self) -> &GridConfig {
        self.config.grid(self.active)
    }

    /// Switch the active variant, returning the previous one
    pub fn set_active_layout(&mut self, variant: LayoutVariant) -> LayoutVariant {
        let previous = std::mem::replace(&mut self.active, variant);
        if previous != variant {
            info!("📱 Switched layout {} -> {}", previous, variant);
        }
        previous
    }

    /// Number of effective changes applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cards(&self, variant: LayoutVariant) -> &[Card] {
        self.layouts.get(&variant).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered cards of the active variant
    pub fn current_device_cards(&self) -> &[Card] {
        self.cards(self.active)
    }

    /// Create a card of `kind` with its default span and content in every variant.
    ///
    /// Each variant places its own copy at the first free slot. Variants with
    /// no room keep the card unplaced; if the active variant has no room the
    /// card is not created at all.
    pub fn add_card(&mut self, kind: CardKind) -> GridResult<CardId> {
        let id = CardId::generate();
        let template = Card::new(id.clone(), kind);

        let mut placed = Vec::with_capacity(LayoutVariant::ALL.len());
        for variant in LayoutVariant::ALL {
            let grid = self.config.grid(variant);
            let span = template.size.clamped(grid.max_cols, grid.max_rows);
            let position =
                find_free_position(span, grid.max_cols, grid.max_rows, self.cards(variant));
            if position.is_none() && variant == self.active {
                warn!("⚠️ No room for a {} card in the {} layout", span, variant);
                return Err(GridError::NoFreeSlot {
                    layout: variant,
                    span,
                });
            }
            let mut card = template.clone().with_size(span);
            card.grid_position = position;
            placed.push((variant, card));
        }

        for (variant, card) in placed {
            match card.grid_position {
                Some(position) => debug!("{}: placed {} at {}", variant, id, position),
                None => debug!("{}: {} left unplaced", variant, id),
            }
            self.layouts.entry(variant).or_default().push(card);
        }
        self.revision += 1;
        info!("➕ Added {:?} card {}", kind, id);
        Ok(id)
    }

    /// Insert a prepared card into one variant after checking it against the grid
    pub fn insert_card(&mut self, variant: LayoutVariant, card: Card) -> GridResult<()> {
        if self.cards(variant).iter().any(|other| other.id == card.id) {
            return Err(GridError::ConfigurationError(format!(
                "Card {} already exists in the {} layout",
                card.id, variant
            )));
        }
        self.check_card(variant, &card)?;
        self.layouts.entry(variant).or_default().push(card);
        self.revision += 1;
        Ok(())
    }

    /// Remove a card from every variant
    pub fn remove_card(&mut self, id: &CardId) -> GridResult<()> {
        let mut removed = false;
        for cards in self.layouts.values_mut() {
            let before = cards.len();
            cards.retain(|card| &card.id != id);
            removed |= cards.len() != before;
        }
        if !removed {
            return Err(GridError::CardNotFound(id.clone()));
        }
        self.revision += 1;
        info!("🗑️  Removed card {}", id);
        Ok(())
    }

    /// Merge `patch` into the card in the active variant.
    ///
    /// Returns `Ok(false)` when the patch leaves the card as it was.
    pub fn update_card(&mut self, id: &CardId, patch: CardPatch) -> GridResult<bool> {
        let variant = self.active;
        let current = self
            .card(variant, id)
            .ok_or_else(|| GridError::CardNotFound(id.clone()))?;
        let updated = current.patched(&patch);
        if &updated == current {
            return Ok(false);
        }
        if let Err(err) = self.check_card(variant, &updated) {
            warn!("⚠️ Refused update of {} in {} layout: {}", id, variant, err);
            return Err(err);
        }

        let cards = self.layouts.entry(variant).or_default();
        if let Some(card) = cards.iter_mut().find(|card| &card.id == id) {
            *card = updated;
        }
        self.revision += 1;
        debug!("{}: {} now {:?}", variant, id, patch);
        Ok(true)
    }

    /// Check the data-model invariants for `card` against its siblings
    fn check_card(&self, variant: LayoutVariant, card: &Card) -> GridResult<()> {
        let grid = self.config.grid(variant);
        if !card.size.is_within(grid.max_cols, grid.max_rows) {
            return Err(GridError::InvalidSpan {
                span: card.size,
                max_cols: grid.max_cols,
                max_rows: grid.max_rows,
            });
        }
        let Some(rect) = card.rect() else {
            return Ok(());
        };
        if !rect.fits_within(grid.max_cols, grid.max_rows) {
            return Err(GridError::OutOfBounds {
                rect,
                max_cols: grid.max_cols,
                max_rows: grid.max_rows,
            });
        }
        if let Some(other) = first_collision(&rect, &card.id, self.cards(variant)) {
            return Err(GridError::Collision {
                card: card.id.clone(),
                other: other.clone(),
            });
        }
        Ok(())
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            active: self.active,
            layouts: LayoutVariant::ALL
                .into_iter()
                .map(|variant| (variant, self.cards(variant).to_vec()))
                .collect(),
        }
    }

    pub fn export_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Rebuild a store from a snapshot, re-checking every card
    pub fn from_snapshot(config: BentoConfig, snapshot: LayoutSnapshot) -> GridResult<Self> {
        let mut store = Self::new(config);
        for (variant, cards) in snapshot.layouts {
            for card in cards {
                store.insert_card(variant, card)?;
            }
        }
        store.active = snapshot.active;
        store.revision = 0;
        Ok(store)
    }

    pub fn import_json(config: BentoConfig, json: &str) -> GridResult<Self> {
        let snapshot: LayoutSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(config, snapshot)
    }
}

impl LayoutRepository for LayoutStore {
    fn active_layout(&self) -> LayoutVariant {
        self.active
    }

    fn list_placed(&self, layout: LayoutVariant) -> Vec<&Card> {
        self.cards(layout).iter().filter(|card| card.is_placed()).collect()
    }

    fn card(&self, layout: LayoutVariant, id: &CardId) -> Option<&Card> {
        self.cards(layout).iter().find(|card| &card.id == id)
    }

    fn apply_update(&mut self, id: &CardId, patch: CardPatch) -> GridResult<()> {
        self.update_card(id, patch).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::span::{GridPosition, Span};

    fn small_store() -> LayoutStore {
        let mut config = BentoConfig::default();
        config.desktop = GridConfig::new(4, 4, 100.0, 0.0);
        LayoutStore::new(config)
    }

    #[test]
    fn test_add_card_places_in_every_variant() {
        let mut store = small_store();
        let id = store.add_card(CardKind::Image).unwrap();
        for variant in LayoutVariant::ALL {
            let card = store.card(variant, &id).unwrap();
            assert_eq!(card.grid_position, Some(GridPosition::new(0, 0)));
            assert_eq!(card.size, Span::new(2, 2));
        }
        let second = store.add_card(CardKind::Text).unwrap();
        assert_eq!(
            store.card(LayoutVariant::Desktop, &second).unwrap().grid_position,
            Some(GridPosition::new(2, 0))
        );
        assert_eq!(
            store.card(LayoutVariant::Mobile, &second).unwrap().grid_position,
            Some(GridPosition::new(0, 2))
        );
    }

    #[test]
    fn test_add_card_fails_when_active_layout_full() {
        let mut store = small_store();
        for _ in 0..4 {
            store.add_card(CardKind::Image).unwrap();
        }
        let revision = store.revision();
        let err = store.add_card(CardKind::Image).unwrap_err();
        assert!(matches!(
            err,
            GridError::NoFreeSlot {
                layout: LayoutVariant::Desktop,
                ..
            }
        ));
        assert_eq!(store.current_device_cards().len(), 4);
        assert_eq!(store.cards(LayoutVariant::Mobile).len(), 4);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_full_inactive_layout_keeps_card_unplaced() {
        let mut config = BentoConfig::default();
        config.mobile = GridConfig::new(2, 2, 100.0, 0.0);
        let mut store = LayoutStore::new(config);
        store.add_card(CardKind::Image).unwrap();
        let id = store.add_card(CardKind::Image).unwrap();
        assert_eq!(store.card(LayoutVariant::Mobile, &id).unwrap().grid_position, None);
        assert!(store.card(LayoutVariant::Desktop, &id).unwrap().is_placed());
        assert_eq!(store.list_placed(LayoutVariant::Mobile).len(), 1);
    }

    #[test]
    fn test_update_is_scoped_to_active_layout() {
        let mut store = small_store();
        let id = store.add_card(CardKind::Image).unwrap();
        assert!(store.update_card(&id, CardPatch::size(Span::new(3, 2))).unwrap());
        assert_eq!(store.card(LayoutVariant::Desktop, &id).unwrap().size, Span::new(3, 2));
        assert_eq!(store.card(LayoutVariant::Tablet, &id).unwrap().size, Span::new(2, 2));
        assert_eq!(store.card(LayoutVariant::Mobile, &id).unwrap().size, Span::new(2, 2));
    }

    #[test]
    fn test_repeated_update_is_noop() {
        let mut store = small_store();
        let id = store.add_card(CardKind::Image).unwrap();
        let before = store.revision();
        assert!(store.update_card(&id, CardPatch::size(Span::new(3, 3))).unwrap());
        assert!(!store.update_card(&id, CardPatch::size(Span::new(3, 3))).unwrap());
        assert_eq!(store.revision(), before + 1);
    }

    #[test]
    fn test_update_guards_invariants() {
        let mut store = small_store();
        let a = store.add_card(CardKind::Image).unwrap();
        let b = store.add_card(CardKind::Image).unwrap();

        let err = store.update_card(&a, CardPatch::size(Span::new(3, 2))).unwrap_err();
        assert_eq!(
            err,
            GridError::Collision {
                card: a.clone(),
                other: b.clone()
            }
        );
        let err = store.update_card(&b, CardPatch::size(Span::new(5, 1))).unwrap_err();
        assert!(matches!(err, GridError::InvalidSpan { .. }));
        let err = store
            .update_card(&b, CardPatch::position(GridPosition::new(3, 0)))
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(store.card(LayoutVariant::Desktop, &a).unwrap().size, Span::new(2, 2));

        let missing = CardId::from("missing");
        assert_eq!(
            store.update_card(&missing, CardPatch::size(Span::new(1, 1))),
            Err(GridError::CardNotFound(missing))
        );
    }

    #[test]
    fn test_remove_card_everywhere() {
        let mut store = small_store();
        let id = store.add_card(CardKind::Form).unwrap();
        store.remove_card(&id).unwrap();
        for variant in LayoutVariant::ALL {
            assert!(store.card(variant, &id).is_none());
        }
        assert_eq!(store.remove_card(&id), Err(GridError::CardNotFound(id)));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let mut store = small_store();
        let id = store.add_card(CardKind::Text).unwrap();
        store.set_active_layout(LayoutVariant::Tablet);
        let json = store.export_json().unwrap();
        assert!(json.contains("\"2x1\""));

        let restored = LayoutStore::import_json(store.config().clone(), &json).unwrap();
        assert_eq!(restored.active_layout(), LayoutVariant::Tablet);
        assert_eq!(restored.snapshot(), store.snapshot());
        assert!(restored.card(LayoutVariant::Desktop, &id).is_some());
    }

    #[test]
    fn test_import_rejects_overlapping_cards() {
        let json = r#"{
            "active": "desktop",
            "layouts": {
                "desktop": [
                    {"id": "a", "kind": "image", "size": "2x2", "gridPosition": {"col": 0, "row": 0}, "content": {"title": "", "description": "", "url": "", "backgroundColor": "", "textColor": ""}},
                    {"id": "b", "kind": "image", "size": "2x2", "gridPosition": {"col": 1, "row": 1}, "content": {"title": "", "description": "", "url": "", "backgroundColor": "", "textColor": ""}}
                ]
            }
        }"#;
        let err = LayoutStore::import_json(BentoConfig::default(), json).err();
        assert!(matches!(err, Some(GridError::Collision { .. })));

        let bad_size = json.replace("\"2x2\"", "\"2by2\"");
        let err = LayoutStore::import_json(BentoConfig::default(), &bad_size).err();
        assert!(matches!(err, Some(GridError::SerializationError(_))));
    }

    #[test]
    fn test_import_rejects_position_past_u32_edge() {
        let json = r#"{
            "active": "desktop",
            "layouts": {
                "desktop": [
                    {"id": "far", "kind": "image", "size": "2x2", "gridPosition": {"col": 4294967295, "row": 0}, "content": {"title": "", "description": "", "url": "", "backgroundColor": "", "textColor": ""}}
                ]
            }
        }"#;
        let err = LayoutStore::import_json(BentoConfig::default(), json).err();
        assert!(matches!(err, Some(GridError::OutOfBounds { .. })));

        let low = json.replace("\"col\": 4294967295, \"row\": 0", "\"col\": 0, \"row\": 4294967294");
        let err = LayoutStore::import_json(BentoConfig::default(), &low).err();
        assert!(matches!(err, Some(GridError::OutOfBounds { .. })));
    }
}
