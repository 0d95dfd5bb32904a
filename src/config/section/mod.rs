//! Configuration section definitions.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! subtitle = "a personal blog"
//! posts_per_page = 5
//! use_katex = false
//!
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [author]
//! name = "Alice"
//! photo = "/photo.jpg"
//! bio = "I love all things tech."
//!
//! [author.contacts]
//! github = "alice"
//! ```

mod author;
mod menu;
mod site;

pub use author::{AuthorConfig, ContactsConfig};
pub use menu::{MenuEntry, validate_menu};
pub use site::{DEFAULT_TITLE_PREFIX, SiteMetaConfig};
