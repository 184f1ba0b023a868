//! Domain layer: the music catalog composite
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod component;
pub mod error;
pub mod render;
pub mod sample;

pub use arena::{Ancestors, Catalog, MusicNode, NodeId, NodeRef, PostOrderIterator, TreeIterator};
pub use builder::DiscographyBuilder;
pub use component::{ComponentKind, MusicComponent};
pub use error::{DomainError, DomainResult};
pub use render::TreeDisplay;
