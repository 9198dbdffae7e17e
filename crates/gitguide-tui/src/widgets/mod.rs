//! Custom widget components

pub mod animation_panel;
mod card;
mod confirm_dialog;
pub mod diagram;
mod faq;
mod header;
mod intro;
pub mod modal_overlay;
mod notice;
mod progress_panel;
mod search_overlay;
mod settings_panel;
mod status_bar;
mod tabs;
pub mod text;
mod viz;

pub use animation_panel::{AnimationPanel, PANEL_HEIGHT};
pub use card::{CardDetail, CardList};
pub use confirm_dialog::ConfirmDialog;
pub use diagram::NodeGraph;
pub use faq::FaqList;
pub use header::MainHeader;
pub use intro::IntroPage;
pub use notice::NoticeBanner;
pub use progress_panel::ProgressPanel;
pub use search_overlay::SearchOverlay;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use tabs::GuideTabs;
pub use viz::VizPage;
