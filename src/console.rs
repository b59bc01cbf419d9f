//! Line-oriented terminal front end for the query panels

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::app::{App, Presentation};
use crate::presenter::{PanelView, SkinView};
use crate::query::QueryKind;

const HELP: &str = "commands: server <address> | player <name or uuid> | quit";

/// Prints every panel update to `out`
pub struct ConsolePresentation<W: Write> {
    out: W,
}

impl<W: Write> ConsolePresentation<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }
}

fn panel_title(panel: QueryKind) -> &'static str {
    match panel {
        QueryKind::ServerStatus => "server",
        QueryKind::PlayerInfo => "player",
    }
}

pub fn format_view(view: &PanelView) -> String {
    match view {
        PanelView::Error(error) => format!("  error: {}", error.message),
        PanelView::Server(server) => {
            let mut lines = vec![
                format!("  status:  {}", server.status_label),
                format!("  address: {}", server.address),
                format!("  players: {}", server.players),
                format!("  version: {}", server.version),
            ];
            if let Some(motd) = &server.motd {
                lines.push(format!("  motd:    {}", motd.plain));
                lines.push(format!("  motd (markup): {}", motd.html));
            }
            lines.join("\n")
        }
        PanelView::Player(player) => [
            format!("  code:     {}", player.code),
            format!("  username: {}", player.username),
            format!("  uuid:     {}", player.uuid),
            format!("  skin url: {}", player.skin_url_label()),
        ]
        .join("\n"),
    }
}

pub fn format_skin(skin: &SkinView) -> String {
    match skin {
        SkinView::Loaded(image) => format!("  skin: {}x{} preview", image.width(), image.height()),
        other => format!("  skin: {}", other.placeholder().unwrap_or_default()),
    }
}

impl<W: Write> Presentation for ConsolePresentation<W> {
    fn on_query_started(&mut self, panel: QueryKind) {
        self.print(&format!("[{}] querying...", panel_title(panel)));
    }

    fn on_result(&mut self, panel: QueryKind, view: &PanelView) {
        self.print(&format!("[{}]", panel_title(panel)));
        self.print(&format_view(view));
    }

    fn on_skin(&mut self, panel: QueryKind, skin: &SkinView) {
        self.print(&format!("[{}]", panel_title(panel)));
        self.print(&format_skin(skin));
    }

    fn on_query_completed(&mut self, panel: QueryKind) {
        self.print(&format!("[{}] done", panel_title(panel)));
    }
}

/// Read commands from `input` and interleave them with background results.
///
/// End of input waits for outstanding queries; `quit` leaves immediately.
pub async fn run_console<R, W>(app: &mut App<ConsolePresentation<W>>, input: R)
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    app.presentation_mut().print(HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        app.run_until_idle().await;
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                };

                let (command, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
                let submitted = match command {
                    "server" => app.on_submit_server_query(rest),
                    "player" => app.on_submit_player_query(rest),
                    "quit" | "exit" => break,
                    "" => continue,
                    _ => {
                        app.presentation_mut().print(HELP);
                        continue;
                    }
                };

                if let Err(e) = submitted {
                    app.presentation_mut().print(&format!("warning: {}", e));
                }
            }
            Some(event) = app.next_event() => {
                app.handle_event(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::render;
    use crate::query::{QueryDispatcher, QueryResult};
    use crate::skin::SkinFetcher;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_format_server_view() {
        let view = render(
            QueryKind::ServerStatus,
            &QueryResult::Success {
                payload: json!({"online": true, "ip": "1.2.3.4", "port": 25565}),
            },
        );

        let text = format_view(&view);
        assert!(text.contains("status:  online"));
        assert!(text.contains("address: 1.2.3.4:25565"));
        assert!(text.contains("motd:    none"));
    }

    #[test]
    fn test_presentation_output() {
        let mut console = ConsolePresentation::new(Vec::new());
        console.on_query_started(QueryKind::PlayerInfo);
        console.on_result(QueryKind::PlayerInfo, &PanelView::error("API request failed: 404"));
        console.on_skin(QueryKind::PlayerInfo, &SkinView::Failed);
        console.on_query_completed(QueryKind::PlayerInfo);

        let output = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            output,
            "[player] querying...\n\
             [player]\n  error: API request failed: 404\n\
             [player]\n  skin: skin load failed\n\
             [player] done\n"
        );
    }

    #[tokio::test]
    async fn test_end_of_input_waits_for_pending_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("server", "hypixel.net"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"online": false, "ip": "1.2.3.4", "port": 25565}))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let mut app = App::with_parts(
            QueryDispatcher::with_client(client.clone(), mock_server.uri()),
            SkinFetcher::new(client),
            ConsolePresentation::new(Vec::new()),
        );

        run_console(&mut app, &b"server hypixel.net\n"[..]).await;

        assert!(app.is_idle());
        let output = String::from_utf8(app.presentation().out.clone()).unwrap();
        assert!(output.contains("[server] querying..."));
        assert!(output.contains("address: 1.2.3.4:25565"));
        assert!(output.ends_with("[server] done\n"));
    }

    #[tokio::test]
    async fn test_blank_command_warns_without_querying() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let mut app = App::with_parts(
            QueryDispatcher::with_client(client.clone(), mock_server.uri()),
            SkinFetcher::new(client),
            ConsolePresentation::new(Vec::new()),
        );

        run_console(&mut app, &b"player   \nquit\n"[..]).await;

        let output = String::from_utf8(app.presentation().out.clone()).unwrap();
        assert!(output.contains("warning: please enter a player name or UUID"));
        assert!(!output.contains("querying"));
    }
}
