use image::RgbaImage;

pub const NONE_PLACEHOLDER: &str = "none";
pub const SKIN_LOADING_TEXT: &str = "loading skin...";
pub const SKIN_FAILED_TEXT: &str = "skin load failed";

/// Everything a result panel needs to draw itself.
///
/// Each view replaces whatever the panel showed before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Server(ServerStatusView),
    Player(PlayerInfoView),
    Error(ErrorView),
}

impl PanelView {
    pub fn error(message: impl Into<String>) -> Self {
        PanelView::Error(ErrorView {
            message: message.into(),
        })
    }

    /// Skin URL that should be fetched once this view is shown
    pub fn skin_url(&self) -> Option<&str> {
        match self {
            PanelView::Player(player) => player.skin_url.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatusView {
    pub status_label: &'static str,
    pub address: String,
    pub players: String,
    pub version: String,
    /// Present only for online servers
    pub motd: Option<MotdView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotdView {
    /// Pre-formatted markup, for toolkits that can render HTML
    pub html: String,
    pub plain: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfoView {
    pub code: String,
    pub username: String,
    pub uuid: String,
    pub skin_url: Option<String>,
}

impl PlayerInfoView {
    pub fn skin_url_label(&self) -> &str {
        self.skin_url.as_deref().unwrap_or(NONE_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
}

/// State of the skin preview beneath a player view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinView {
    Loading,
    Loaded(SkinImage),
    Failed,
}

impl SkinView {
    /// Text shown in place of the image, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            SkinView::Loading => Some(SKIN_LOADING_TEXT),
            SkinView::Loaded(_) => None,
            SkinView::Failed => Some(SKIN_FAILED_TEXT),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SkinImage {
    pixels: RgbaImage,
}

impl SkinImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl std::fmt::Debug for SkinImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
