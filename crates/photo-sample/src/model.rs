use serde::{Deserialize, Serialize};

/// A photo in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u32,
    pub title: String,
}

/// A comment left on a [`Photo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    pub photo_id: u32,
    pub body: String,
}
