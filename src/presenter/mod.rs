mod payload;
mod render;
mod view;

pub use payload::{PlayerInfoPayload, ServerStatusPayload};
pub use render::render;
pub use view::{
    ErrorView, MotdView, PanelView, PlayerInfoView, ServerStatusView, SkinImage, SkinView,
    NONE_PLACEHOLDER, SKIN_FAILED_TEXT, SKIN_LOADING_TEXT,
};
