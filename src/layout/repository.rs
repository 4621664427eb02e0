use crate::card::{Card, CardId, CardPatch};
use crate::grid::traits::GridResult;
use crate::layout::LayoutVariant;

/// Card storage consulted and written by the interaction controllers.
///
/// Writes are scoped to the active layout variant; reads name the variant
/// explicitly so a controller can tell when its session went stale.
pub trait LayoutRepository {
    /// Variant currently being edited
    fn active_layout(&self) -> LayoutVariant;

    /// Cards of `layout` that have a grid position, in store order
    fn list_placed(&self, layout: LayoutVariant) -> Vec<&Card>;

    /// Look up one card of `layout`, placed or not
    fn card(&self, layout: LayoutVariant, id: &CardId) -> Option<&Card>;

    /// Merge `patch` into the card in the active layout
    fn apply_update(&mut self, id: &CardId, patch: CardPatch) -> GridResult<()>;
}
