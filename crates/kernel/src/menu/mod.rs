//! Navigation menu for the analysis frontend.
//!
//! The sidebar is built from a fixed set of menu groups declared at compile
//! time. The frontend fetches them through `GET /api/menu` and renders the
//! groups and links in the order they are declared here.

mod registry;

pub use registry::{MenuGroup, MenuLink, NavigationRegistry, menu_groups};
