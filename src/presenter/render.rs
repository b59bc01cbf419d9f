use serde_json::Value;

use super::payload::{api_failure, PlayerInfoPayload, ServerStatusPayload, UNKNOWN};
use super::view::{MotdView, PanelView, PlayerInfoView, ServerStatusView, NONE_PLACEHOLDER};
use crate::query::{QueryError, QueryKind, QueryResult};

/// Turn a query outcome into the view for the panel owning `kind`.
pub fn render(kind: QueryKind, result: &QueryResult) -> PanelView {
    match result {
        QueryResult::Failure { message } => PanelView::error(message.clone()),
        QueryResult::Success { payload } => {
            if let Some(message) = api_failure(payload) {
                return PanelView::error(QueryError::ApiLogical(message).to_string());
            }

            match kind {
                QueryKind::ServerStatus => PanelView::Server(server_view(payload)),
                QueryKind::PlayerInfo => PanelView::Player(player_view(payload)),
            }
        }
    }
}

fn server_view(payload: &Value) -> ServerStatusView {
    let status = ServerStatusPayload::from_value(payload);

    let port = status
        .port
        .map(|p| p.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let motd = status.online.then(|| MotdView {
        html: status
            .motd_html
            .unwrap_or_else(|| NONE_PLACEHOLDER.to_string()),
        plain: status
            .motd_clean
            .unwrap_or_else(|| NONE_PLACEHOLDER.to_string()),
    });

    ServerStatusView {
        status_label: if status.online { "online" } else { "offline" },
        address: format!("{}:{}", status.ip, port),
        players: format!("{} / {}", status.players, status.max_players),
        version: status.version,
        motd,
    }
}

fn player_view(payload: &Value) -> PlayerInfoView {
    let player = PlayerInfoPayload::from_value(payload);

    PlayerInfoView {
        code: player.code,
        username: player.username,
        uuid: player.uuid,
        skin_url: player.skin_url,
    }
}
