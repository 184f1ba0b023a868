//! Catalog entries: the payload carried by every tree node

use std::fmt;

/// Variant tag of a [`MusicComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Discography,
    Album,
    Song,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComponentKind::Discography => "discography",
            ComponentKind::Album => "album",
            ComponentKind::Song => "song",
        };
        f.write_str(label)
    }
}

/// Data payload for catalog nodes.
///
/// All variants share the same tree capabilities in [`Catalog`](crate::domain::Catalog);
/// the variant only decides which descriptive field the node carries.
/// Songs are leaves by convention, nothing prevents adding children to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicComponent {
    /// Composite root, one per artist
    Discography { artist: String },
    /// Composite holding songs
    Album { title: String },
    /// Leaf
    Song { title: String },
}

impl MusicComponent {
    pub fn discography(artist: impl Into<String>) -> Self {
        Self::Discography {
            artist: artist.into(),
        }
    }

    pub fn album(title: impl Into<String>) -> Self {
        Self::Album {
            title: title.into(),
        }
    }

    pub fn song(title: impl Into<String>) -> Self {
        Self::Song {
            title: title.into(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Discography { .. } => ComponentKind::Discography,
            Self::Album { .. } => ComponentKind::Album,
            Self::Song { .. } => ComponentKind::Song,
        }
    }

    /// Title of an album or song, `None` for a discography.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Album { title } | Self::Song { title } => Some(title),
            Self::Discography { .. } => None,
        }
    }

    /// Artist of a discography, `None` for albums and songs.
    pub fn artist(&self) -> Option<&str> {
        match self {
            Self::Discography { artist } => Some(artist),
            _ => None,
        }
    }

    /// The descriptive label of any variant: artist or title.
    pub fn name(&self) -> &str {
        match self {
            Self::Discography { artist } => artist,
            Self::Album { title } | Self::Song { title } => title,
        }
    }

    /// Replaces the title. Returns `false` (and changes nothing) for a discography.
    pub fn set_title(&mut self, new_title: impl Into<String>) -> bool {
        match self {
            Self::Album { title } | Self::Song { title } => {
                *title = new_title.into();
                true
            }
            Self::Discography { .. } => false,
        }
    }

    /// Replaces the artist. Returns `false` (and changes nothing) for albums and songs.
    pub fn set_artist(&mut self, new_artist: impl Into<String>) -> bool {
        match self {
            Self::Discography { artist } => {
                *artist = new_artist.into();
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for MusicComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_variants_when_reading_fields_then_only_own_field_is_present() {
        let disco = MusicComponent::discography("The Beatles");
        let album = MusicComponent::album("Revolver");
        let song = MusicComponent::song("Eleanor Rigby");

        assert_eq!(disco.artist(), Some("The Beatles"));
        assert_eq!(disco.title(), None);
        assert_eq!(album.title(), Some("Revolver"));
        assert_eq!(album.artist(), None);
        assert_eq!(song.title(), Some("Eleanor Rigby"));
        assert_eq!(song.kind(), ComponentKind::Song);
    }

    #[test]
    fn given_album_when_setting_artist_then_rejected() {
        let mut album = MusicComponent::album("Revolver");
        assert!(!album.set_artist("Someone"));
        assert!(album.set_title("Help!"));
        assert_eq!(album.name(), "Help!");
    }

    #[test]
    fn given_discography_when_setting_title_then_rejected() {
        let mut disco = MusicComponent::discography("The Beatles");
        assert!(!disco.set_title("Rubber Soul"));
        assert!(disco.set_artist("The Quarrymen"));
        assert_eq!(disco.to_string(), "The Quarrymen");
    }
}
