// ABOUTME: Host-browser integration module
// Provides the TabHost seam, the desktop implementation, and tab relaunching

pub mod desktop;
pub mod host;
pub mod launch;
pub mod snapshot;

pub use desktop::{DesktopHost, SnapshotSource};
pub use host::{HostError, TabHost};
pub use launch::{launch_all, launch_selected, open_single, LaunchReport};
pub use snapshot::parse_tab_listing;
