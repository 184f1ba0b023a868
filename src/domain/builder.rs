//! Builder for assembling a discography tree in one expression.

use tracing::{debug, instrument};

use crate::domain::arena::{Catalog, NodeId};
use crate::domain::component::MusicComponent;
use crate::domain::error::DomainResult;

/// Album title plus song titles, in the order they were declared.
#[derive(Debug, Clone)]
struct AlbumSpec {
    title: String,
    songs: Vec<String>,
}

/// Constructs a discography → album → song hierarchy in a fresh [`Catalog`].
///
/// Songs are attached to their album first, then albums are attached to the
/// discography in declaration order.
#[derive(Debug, Clone)]
pub struct DiscographyBuilder {
    artist: String,
    albums: Vec<AlbumSpec>,
}

impl DiscographyBuilder {
    pub fn new(artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            albums: Vec::new(),
        }
    }

    pub fn album<I, S>(mut self, title: impl Into<String>, songs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.albums.push(AlbumSpec {
            title: title.into(),
            songs: songs.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Returns the catalog and the handle of the discography root.
    #[instrument(level = "debug", skip(self), fields(artist = %self.artist))]
    pub fn build(self) -> DomainResult<(Catalog, NodeId)> {
        let mut catalog = Catalog::new();
        let root = catalog.insert(MusicComponent::discography(self.artist));

        let mut albums = Vec::with_capacity(self.albums.len());
        for spec in self.albums {
            let album = catalog.insert(MusicComponent::album(spec.title));
            for title in spec.songs {
                let song = catalog.insert(MusicComponent::song(title));
                catalog.add_child(album, song)?;
            }
            albums.push(album);
        }
        for album in albums {
            catalog.add_child(root, album)?;
        }

        debug!(nodes = catalog.len(), "discography built");
        Ok((catalog, root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_albums_when_building_then_lone_root() {
        let (catalog, root) = DiscographyBuilder::new("Nobody").build().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.view(root).unwrap().artist(), Some("Nobody"));
        assert!(catalog.view(root).unwrap().is_leaf());
    }

    #[test]
    fn given_albums_when_building_then_declaration_order_kept() {
        let (catalog, root) = DiscographyBuilder::new("X")
            .album("B", ["b1"])
            .album("A", Vec::<String>::new())
            .build()
            .unwrap();

        let titles: Vec<_> = catalog
            .view(root)
            .unwrap()
            .children()
            .map(|album| album.name())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
