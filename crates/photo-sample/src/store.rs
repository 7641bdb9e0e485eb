//! # Photo Store
//!
//! An in-memory gallery shared by every handler. Clones share the same data
//! through an `Arc<RwLock<_>>`, so loaders and handlers can each hold one.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{Comment, Photo};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

fn parse_id(raw: &str) -> Result<u32, StoreError> {
    raw.parse().map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[derive(Debug)]
struct Gallery {
    photos: BTreeMap<u32, Photo>,
    comments: BTreeMap<u32, Comment>,
    next_id: u32,
}

impl Gallery {
    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct PhotoStore {
    inner: Arc<RwLock<Gallery>>,
}

impl Default for PhotoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Gallery {
                photos: BTreeMap::new(),
                comments: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    pub async fn insert(&self, title: impl Into<String>) -> Photo {
        let mut gallery = self.inner.write().await;
        let photo = Photo {
            id: gallery.next_id(),
            title: title.into(),
        };
        debug!(photo_id = photo.id, "Inserted");
        gallery.photos.insert(photo.id, photo.clone());
        photo
    }

    pub async fn list(&self) -> Vec<Photo> {
        self.inner.read().await.photos.values().cloned().collect()
    }

    /// Looks up a photo by its raw route value.
    pub async fn find(&self, raw_id: &str) -> Result<Option<Photo>, StoreError> {
        let id = parse_id(raw_id)?;
        Ok(self.inner.read().await.photos.get(&id).cloned())
    }

    /// Removes a photo along with its comments.
    pub async fn remove(&self, id: u32) -> Option<Photo> {
        let mut gallery = self.inner.write().await;
        gallery.comments.retain(|_, comment| comment.photo_id != id);
        gallery.photos.remove(&id)
    }

    pub async fn comment(&self, photo_id: u32, body: impl Into<String>) -> Comment {
        let mut gallery = self.inner.write().await;
        let comment = Comment {
            id: gallery.next_id(),
            photo_id,
            body: body.into(),
        };
        gallery.comments.insert(comment.id, comment.clone());
        comment
    }

    pub async fn comments_for(&self, photo_id: u32) -> Vec<Comment> {
        self.inner
            .read()
            .await
            .comments
            .values()
            .filter(|comment| comment.photo_id == photo_id)
            .cloned()
            .collect()
    }

    /// Looks up a comment, scoped to `photo` when given.
    pub async fn find_comment(&self, photo: Option<&str>, raw_id: &str) -> Result<Option<Comment>, StoreError> {
        let id = parse_id(raw_id)?;
        let photo_id = photo.map(parse_id).transpose()?;
        let gallery = self.inner.read().await;
        Ok(gallery
            .comments
            .get(&id)
            .filter(|comment| photo_id.map_or(true, |pid| comment.photo_id == pid))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_round_trip() {
        let store = PhotoStore::new();
        let sunset = store.insert("Sunset").await;
        let comment = store.comment(sunset.id, "Lovely").await;

        assert_eq!(store.find(&sunset.id.to_string()).await.unwrap(), Some(sunset.clone()));
        assert_eq!(store.find("99").await.unwrap(), None);
        assert!(matches!(store.find("abc").await, Err(StoreError::InvalidId(_))));

        let scoped = store.find_comment(Some("1"), &comment.id.to_string()).await.unwrap();
        assert_eq!(scoped, Some(comment.clone()));
        let other = store.find_comment(Some("42"), &comment.id.to_string()).await.unwrap();
        assert_eq!(other, None);

        store.remove(sunset.id).await;
        assert!(store.comments_for(sunset.id).await.is_empty());
        assert!(store.list().await.is_empty());
    }
}
