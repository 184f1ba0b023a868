//! The sample catalog shipped with the CLI.

use crate::domain::arena::{Catalog, NodeId};
use crate::domain::builder::DiscographyBuilder;
use crate::domain::error::DomainResult;

pub const BEATLES: &str = "The Beatles";

/// The Beatles: four albums with two songs each (13 nodes).
pub fn beatles() -> DomainResult<(Catalog, NodeId)> {
    DiscographyBuilder::new(BEATLES)
        .album("Rubber Soul", ["Norwegian Wood", "Nowhere Man"])
        .album("Revolver", ["Eleanor Rigby", "Tomorrow Never Knows"])
        .album(
            "Sgt. Pepper's Lonely Hearts Club Band",
            ["With a Little Help from My Friends", "Getting Better"],
        )
        .album("Abbey Road", ["Come Together", "Here Comes the Sun"])
        .build()
}
