//! # Gallery Routes
//!
//! Wires the [`PhotoStore`] into a [`MockApp`] as two resources:
//!
//! ```text
//! GET    /photos.:format?                          index (json or html by format)
//! GET    /photos/:photo.:format?                   show  (format table)
//! DELETE /photos/:photo.:format?                   destroy
//! GET    /photos/:photo/title.:format?             custom member route
//! GET    /photos/:photo/comments.:format?          nested index
//! GET    /photos/:photo/comments/:comment.:format? nested show
//! ```
//!
//! `photo` and `comment` are auto-loaded, so every member handler can rely on
//! the entity being attached to the request.

use async_trait::async_trait;
use http::StatusCode;
use rest_resource::{
    handler, ActionHandler, Actions, Flow, FormatTable, Handler, Loader, MockApp, Request,
    ResourceExt, Response, RouteError,
};
use serde::Serialize;
use tracing::info;

use crate::model::{Comment, Photo};
use crate::store::PhotoStore;

fn loaded<'r, T: Send + Sync + 'static>(req: &'r Request, field: &str) -> Result<&'r T, RouteError> {
    req.loaded::<T>(field)
        .ok_or_else(|| RouteError::handler(format!("{field} not loaded")))
}

fn send_json<T: Serialize + ?Sized>(res: &mut Response, value: &T) -> Result<Flow, RouteError> {
    let body = serde_json::to_string(value).map_err(RouteError::handler)?;
    res.set_type("json").send(body);
    Ok(Flow::Handled)
}

fn photo_html(photo: &Photo) -> String {
    format!("<h1>{}</h1>", photo.title)
}

/// Lists photos, as JSON unless the request asked for HTML.
struct ListPhotos {
    store: PhotoStore,
}

#[async_trait]
impl Handler for ListPhotos {
    async fn call(&self, req: &mut Request, res: &mut Response) -> Result<Flow, RouteError> {
        let photos = self.store.list().await;
        if req.format() == Some("html") {
            let items: String = photos.iter().map(|p| format!("<li>{}</li>", p.title)).collect();
            res.send(format!("<ul>{items}</ul>"));
            return Ok(Flow::Handled);
        }
        send_json(res, &photos)
    }
}

struct DestroyPhoto {
    store: PhotoStore,
}

#[async_trait]
impl Handler for DestroyPhoto {
    async fn call(&self, req: &mut Request, res: &mut Response) -> Result<Flow, RouteError> {
        let id = loaded::<Photo>(req, "photo")?.id;
        self.store.remove(id).await;
        info!(photo_id = id, "Destroyed");
        res.send_status(StatusCode::NO_CONTENT);
        Ok(Flow::Handled)
    }
}

struct ListComments {
    store: PhotoStore,
}

#[async_trait]
impl Handler for ListComments {
    async fn call(&self, req: &mut Request, res: &mut Response) -> Result<Flow, RouteError> {
        let photo_id = loaded::<Photo>(req, "photo")?.id;
        let comments = self.store.comments_for(photo_id).await;
        send_json(res, &comments)
    }
}

fn show_photo() -> FormatTable {
    FormatTable::new()
        .with(
            "json",
            handler(|req, res| send_json(res, loaded::<Photo>(req, "photo")?)),
        )
        .with(
            "html",
            handler(|req, res| {
                let body = photo_html(loaded::<Photo>(req, "photo")?);
                res.send(body);
                Ok(Flow::Handled)
            }),
        )
}

/// Builds the gallery app on top of `store`.
pub fn build_app(store: PhotoStore) -> MockApp {
    let mut app = MockApp::new();

    let finder = store.clone();
    let photo_loader = Loader::legacy(move |id: String| {
        let store = finder.clone();
        async move { store.find(&id).await }
    });

    let finder = store.clone();
    let comment_loader = Loader::contextual(move |req: &Request, id: String| {
        let store = finder.clone();
        let photo = req.param("photo").map(str::to_owned);
        async move { store.find_comment(photo.as_deref(), &id).await }
    });

    app.resource(
        "photos",
        Actions::default()
            .index(ActionHandler::single(ListPhotos { store: store.clone() }))
            .show(show_photo())
            .destroy(ActionHandler::single(DestroyPhoto { store: store.clone() }))
            .load(photo_loader),
    )
    .get(
        "title",
        handler(|req, res| {
            let title = loaded::<Photo>(req, "photo")?.title.clone();
            res.set_type("txt").send(title);
            Ok(Flow::Handled)
        }),
    )
    .add(
        "comments",
        Actions::default()
            .index(ActionHandler::single(ListComments { store }))
            .show(handler(|req, res| send_json(res, loaded::<Comment>(req, "comment")?)))
            .load(comment_loader),
    );

    info!(routes = app.route_table().len(), "Gallery ready");
    app
}
