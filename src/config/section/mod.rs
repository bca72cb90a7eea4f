//! Configuration section definitions.
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[site]`  | Site metadata (title, description, url)          |
//! | `[head]`  | Head tag injections (icon, meta, raw elements)   |
//! | `[theme]` | Nav entries, sidebar tree, footer, social links  |

mod head;
mod site;
mod theme;

pub use head::{HeadConfig, IconLink, MetaTag};
pub use site::SiteInfoConfig;
pub use theme::{
    FooterConfig, NavEntry, SidebarSection, SocialIcon, SocialLink, ThemeSectionConfig,
};
