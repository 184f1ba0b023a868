//! Composite tree over a music catalog.
//!
//! A [`Catalog`](domain::Catalog) owns discography, album and song nodes in a
//! generational arena. Every node offers the same capabilities (`add_child`,
//! `remove_child`, `get_child`, `get_children`, parent access) regardless of
//! its variant; parent links are arena handles, never owning pointers.
//!
//! ```
//! use discography::domain::{Catalog, MusicComponent};
//!
//! let mut catalog = Catalog::new();
//! let album = catalog.insert(MusicComponent::album("Rubber Soul"));
//! let song = catalog.insert(MusicComponent::song("Norwegian Wood"));
//! catalog.add_child(album, song)?;
//!
//! assert_eq!(catalog.parent(song)?, Some(album));
//! assert_eq!(catalog.get_children(album)?, &[song]);
//! # Ok::<(), discography::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
