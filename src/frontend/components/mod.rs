//! Reusable UI components.

pub mod auth_layout;
pub mod layout;
pub mod loading;
pub mod tabs;
pub mod titlebar;

pub use auth_layout::AuthLayout;
pub use layout::Shell;
pub use loading::LoadingView;
pub use titlebar::TitleBar;
