// ABOUTME: Core data models for tabstash sessions and the tab entries saved inside them

pub mod session;
pub mod tab;

pub use session::Session;
pub use tab::TabEntry;
