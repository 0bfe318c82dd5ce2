//! Errors raised while setting up and running the overlay.

use thiserror::Error;

use crate::capture::CaptureError;
use crate::display::ServerError;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("could not capture screen: {0}")]
    Capture(#[from] CaptureError),

    /// A server-side resource could not be allocated.
    #[error("could not create {what}: {source}")]
    Resource {
        what: &'static str,
        #[source]
        source: ServerError,
    },

    /// Drawing into the pixmap or onto the window failed.
    #[error("could not draw {what}: {source}")]
    Draw {
        what: &'static str,
        #[source]
        source: ServerError,
    },

    /// A window property or attribute could not be changed.
    #[error("could not set {what}: {source}")]
    State {
        what: &'static str,
        #[source]
        source: ServerError,
    },

    /// Reading the next event failed; the connection is unusable.
    #[error("error caught in event loop: {0}")]
    Event(#[source] ServerError),
}

impl OverlayError {
    pub(crate) fn resource(what: &'static str) -> impl FnOnce(ServerError) -> Self {
        move |source| Self::Resource { what, source }
    }

    pub(crate) fn draw(what: &'static str) -> impl FnOnce(ServerError) -> Self {
        move |source| Self::Draw { what, source }
    }

    pub(crate) fn state(what: &'static str) -> impl FnOnce(ServerError) -> Self {
        move |source| Self::State { what, source }
    }
}
