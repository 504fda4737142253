// ABOUTME: UI components for the TUI interface including the session list and modals

pub mod confirm_dialog;
pub mod help;
pub mod layout;
pub mod save_session;
pub mod session_list;
pub mod text;

pub use confirm_dialog::ConfirmDialogComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use save_session::SaveSessionComponent;
pub use session_list::SessionListComponent;
pub use text::sanitize;
