use crate::presenter::{PanelView, SkinView};
use crate::query::{QueryId, QueryKind, QueryResult};

/// Message a background task hands back to the UI context
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The query finished, successfully or not
    Finished {
        panel: QueryKind,
        id: QueryId,
        result: QueryResult,
    },
    /// The skin preview for a player query finished loading
    Skin {
        panel: QueryKind,
        id: QueryId,
        skin: SkinView,
    },
}

impl AppEvent {
    pub fn panel(&self) -> QueryKind {
        match self {
            AppEvent::Finished { panel, .. } | AppEvent::Skin { panel, .. } => *panel,
        }
    }

    pub fn id(&self) -> QueryId {
        match self {
            AppEvent::Finished { id, .. } | AppEvent::Skin { id, .. } => *id,
        }
    }
}

/// The toolkit-facing side of the application.
///
/// All methods are called from the UI context only.
pub trait Presentation {
    /// Disable the trigger, show progress and clear the old result
    fn on_query_started(&mut self, panel: QueryKind);

    /// Replace the panel's content with `view`
    fn on_result(&mut self, panel: QueryKind, view: &PanelView);

    /// Update the skin preview of the player panel
    fn on_skin(&mut self, panel: QueryKind, skin: &SkinView);

    /// Re-enable the trigger and hide progress
    fn on_query_completed(&mut self, panel: QueryKind);
}
