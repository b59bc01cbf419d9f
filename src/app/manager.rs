//! Owns per-panel state and routes background results back to the presentation

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::traits::{AppEvent, Presentation};
use crate::presenter::{render, SkinView};
use crate::query::{http_client, Query, QueryDispatcher, QueryError, QueryId, QueryKind};
use crate::settings::AppSettings;
use crate::skin::SkinFetcher;

#[derive(Debug, Default)]
struct PanelState {
    latest: Option<QueryId>,
    pending: bool,
    skin_pending: bool,
    task: Option<JoinHandle<()>>,
    skin_task: Option<JoinHandle<()>>,
}

impl PanelState {
    /// Abort whatever is still running for the superseded query
    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Cancelling superseded query {:?}", self.latest);
            }
            task.abort();
        }
        if let Some(task) = self.skin_task.take() {
            task.abort();
        }
        self.pending = false;
        self.skin_pending = false;
    }
}

#[derive(Debug, Default)]
struct Panels {
    server: PanelState,
    player: PanelState,
}

impl Panels {
    fn get(&self, kind: QueryKind) -> &PanelState {
        match kind {
            QueryKind::ServerStatus => &self.server,
            QueryKind::PlayerInfo => &self.player,
        }
    }

    fn get_mut(&mut self, kind: QueryKind) -> &mut PanelState {
        match kind {
            QueryKind::ServerStatus => &mut self.server,
            QueryKind::PlayerInfo => &mut self.player,
        }
    }
}

/// The UI-side half of the application.
///
/// `App` lives on the UI context and is the only thing that touches panel
/// state or the presentation. Background tasks report through a channel and
/// the last submission for a panel always wins. Must be driven from inside a
/// tokio runtime.
pub struct App<P: Presentation> {
    dispatcher: QueryDispatcher,
    skins: SkinFetcher,
    panels: Panels,
    next_id: u64,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    presentation: P,
}

impl<P: Presentation> App<P> {
    pub fn new(settings: &AppSettings, presentation: P) -> Result<Self, String> {
        let client = http_client()?;
        let dispatcher = QueryDispatcher::with_client(client.clone(), settings.api_base.clone())
            .timeout(settings.request_timeout());

        Ok(Self::with_parts(
            dispatcher,
            SkinFetcher::new(client),
            presentation,
        ))
    }

    pub fn with_parts(dispatcher: QueryDispatcher, skins: SkinFetcher, presentation: P) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            dispatcher,
            skins,
            panels: Panels::default(),
            next_id: 0,
            events_tx,
            events_rx,
            presentation,
        }
    }

    pub fn on_submit_server_query(&mut self, text: &str) -> Result<QueryId, QueryError> {
        self.submit(QueryKind::ServerStatus, text)
    }

    pub fn on_submit_player_query(&mut self, text: &str) -> Result<QueryId, QueryError> {
        self.submit(QueryKind::PlayerInfo, text)
    }

    /// Validate `text` and start a query for `kind`.
    ///
    /// Validation failures return immediately and leave the panel untouched.
    pub fn submit(&mut self, kind: QueryKind, text: &str) -> Result<QueryId, QueryError> {
        let query = Query::new(kind, text)?;

        self.next_id += 1;
        let id = QueryId(self.next_id);

        let panel = self.panels.get_mut(kind);
        panel.cancel();
        panel.latest = Some(id);
        panel.pending = true;

        tracing::info!("Starting {} query {} for {}", kind, id, query.input());
        self.presentation.on_query_started(kind);

        let dispatcher = self.dispatcher.clone();
        let events_tx = self.events_tx.clone();
        panel.task = Some(tokio::spawn(async move {
            let result = dispatcher.execute(&query).await;
            events_tx
                .send(AppEvent::Finished {
                    panel: kind,
                    id,
                    result,
                })
                .ok();
        }));

        Ok(id)
    }

    /// Wait for the next message from a background task
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Apply one background message. Messages for superseded queries are dropped.
    pub fn handle_event(&mut self, event: AppEvent) {
        let kind = event.panel();
        let panel = self.panels.get_mut(kind);

        if panel.latest != Some(event.id()) {
            tracing::debug!("Dropping stale {} event for query {}", kind, event.id());
            return;
        }

        match event {
            AppEvent::Finished { id, result, .. } => {
                panel.pending = false;
                panel.task = None;

                let view = render(kind, &result);
                self.presentation.on_result(kind, &view);

                if let Some(url) = view.skin_url() {
                    let url = url.to_string();
                    let skins = self.skins.clone();
                    let events_tx = self.events_tx.clone();

                    panel.skin_pending = true;
                    self.presentation.on_skin(kind, &SkinView::Loading);

                    panel.skin_task = Some(tokio::spawn(async move {
                        let skin = skins.fetch(&url).await;
                        events_tx
                            .send(AppEvent::Skin {
                                panel: kind,
                                id,
                                skin,
                            })
                            .ok();
                    }));
                }

                self.presentation.on_query_completed(kind);
            }
            AppEvent::Skin { skin, .. } => {
                panel.skin_pending = false;
                panel.skin_task = None;
                self.presentation.on_skin(kind, &skin);
            }
        }
    }

    /// Process messages until no query or skin fetch is outstanding
    pub async fn run_until_idle(&mut self) {
        while !self.is_idle() {
            match self.next_event().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }

    pub fn is_pending(&self, kind: QueryKind) -> bool {
        self.panels.get(kind).pending
    }

    pub fn is_idle(&self) -> bool {
        [QueryKind::ServerStatus, QueryKind::PlayerInfo]
            .into_iter()
            .map(|kind| self.panels.get(kind))
            .all(|panel| !panel.pending && !panel.skin_pending)
    }

    pub fn latest_query(&self, kind: QueryKind) -> Option<QueryId> {
        self.panels.get(kind).latest
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }
}
