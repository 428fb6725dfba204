//! Configuration sections.
//!
//! | Module    | Fields                                  |
//! |-----------|-----------------------------------------|
//! | `site`    | `title`, `description`, `site`, `base`  |
//! | `social`  | `[[social]]`                            |
//! | `sidebar` | `sidebar`                               |

pub mod sidebar;
pub mod site;
pub mod social;

pub use sidebar::{
    AutogenerateGroup, AutogenerateSource, NavEntry, NavGroup, NavLink, NavPage, SidebarStats,
};
pub use social::{SocialIcon, SocialLink};
