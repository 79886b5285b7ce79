use crate::RenderModel;

/// Opens an item for editing. Implemented by the host's router.
pub trait Navigator {
    fn open_item(&mut self, item_id: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn open_item(&mut self, item_id: &str) {
        self(item_id)
    }
}

/// Where the user clicked on the rendered calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Index into [`RenderModel::events`]
    Event(usize),
    /// A cell of the week grid
    WeekCell { row_index: usize, column: u8 },
}

impl RenderModel {
    pub fn resolve_click(&self, target: ClickTarget) -> Option<&str> {
        match target {
            ClickTarget::Event(index) => self
                .events
                .get(index)
                .map(|positioned| positioned.event.item_id.as_str()),
            ClickTarget::WeekCell { row_index, column } => {
                self.week.as_ref()?.item_at(row_index, column)
            }
        }
    }
}

/// Send the clicked item to `navigator`. Empty cells are a no-op.
///
/// Returns whether navigation happened.
pub fn dispatch_click<N: Navigator + ?Sized>(
    model: &RenderModel,
    target: ClickTarget,
    navigator: &mut N,
) -> bool {
    let Some(item_id) = model.resolve_click(target) else {
        tracing::debug!(?target, "Click on empty calendar cell");

        return false;
    };

    navigator.open_item(item_id);

    true
}
