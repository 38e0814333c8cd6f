use crate::model::{Point, Unit, UnitId};

/// Tracks which units are selected.
///
/// `SelectionManager` is responsible for:
/// - Tracking the "primary" unit (the one property panels edit)
/// - Point-based selection (clicking a footprint in plan view)
/// - Additive selection (Shift+click toggles without clearing)
/// - Keeping the selection consistent when units are deleted or reloaded
///
/// # Selection Model
///
/// - **Primary Selection**: the most recently selected unit, or `None`
/// - **Multiple Selection**: every selected id, in selection order
///
/// Selection is view state: it is never recorded in history and never
/// persisted with the design.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<UnitId>,
}

impl SelectionManager {
    /// Creates a `SelectionManager` with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use closetkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Returns the primary selected unit.
    ///
    /// # Returns
    ///
    /// `Some(id)` for the most recently selected unit, `None` when nothing is selected.
    pub fn primary(&self) -> Option<UnitId> {
        self.selected.last().copied()
    }

    /// Selected ids in the order they were selected.
    pub fn selected(&self) -> &[UnitId] {
        &self.selected
    }

    pub fn is_selected(&self, id: UnitId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selects `id`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unit to select
    /// * `multi` - If `true`, toggles `id` and keeps the rest of the selection;
    ///   if `false`, `id` becomes the only selected unit
    pub fn select(&mut self, id: UnitId, multi: bool) {
        if multi {
            if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id);
            }
        } else {
            self.selected.clear();
            self.selected.push(id);
        }
    }

    /// Selects the topmost unit whose footprint contains `point` (plan mm).
    ///
    /// Later units in `units` are drawn above earlier ones, so the search runs
    /// back to front. Clicking empty floor clears the selection unless `multi`
    /// is set.
    ///
    /// # Returns
    ///
    /// The id of the unit hit, or `None`.
    pub fn select_at(&mut self, units: &[Unit], point: Point, multi: bool) -> Option<UnitId> {
        let hit = units
            .iter()
            .rev()
            .find(|unit| unit.footprint().contains_point(point))
            .map(|unit| unit.id);

        match hit {
            Some(id) => self.select(id, multi),
            None if !multi => self.clear(),
            None => {}
        }
        hit
    }

    /// Selects every unit in `units`, the last one becoming primary.
    pub fn select_all(&mut self, units: &[Unit]) {
        self.selected = units.iter().map(|u| u.id).collect();
    }

    /// Removes `id` from the selection if present.
    pub fn deselect(&mut self, id: UnitId) {
        self.selected.retain(|s| *s != id);
    }

    /// Drops ids that no longer exist in `units`.
    pub fn retain_existing(&mut self, units: &[Unit]) {
        self.selected.retain(|id| units.iter().any(|u| u.id == *id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
