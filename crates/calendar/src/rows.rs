use imfridge_shared::{PerishableItem, days_between};
use time::Date;

/// Vertical stacking slots for one render pass.
///
/// Rows are keyed by the item's position in the input snapshot, so duplicate
/// ids cannot collide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    by_position: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl RowAssignment {
    /// Row of the item at `position` in the input slice
    pub fn row_at(&self, position: usize) -> Option<usize> {
        self.by_position.get(position).copied().flatten()
    }

    /// Input positions sorted by row index
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn row_of(&self, items: &[PerishableItem], item_id: &str) -> Option<usize> {
        items
            .iter()
            .position(|item| item.id == item_id)
            .and_then(|position| self.row_at(position))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Assign rows `0..n`, most imminent terminal date first.
///
/// Items already past their terminal date sort first. Ties keep input order.
/// Items without an effective terminal date get no row.
pub fn assign_rows(items: &[PerishableItem], today: Date) -> RowAssignment {
    let mut keyed = items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            item.effective_terminal_date()
                .map(|date| (days_between(today, date), position))
        })
        .collect::<Vec<_>>();

    // stable
    keyed.sort_by_key(|&(days_until, _)| days_until);

    let mut by_position = vec![None; items.len()];
    let mut order = Vec::with_capacity(keyed.len());

    for (row_index, (_, position)) in keyed.into_iter().enumerate() {
        by_position[position] = Some(row_index);
        order.push(position);
    }

    RowAssignment { by_position, order }
}
