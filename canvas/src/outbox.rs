//! Outbound shape notifications for the persistence gateway.
//!
//! DESIGN
//! ======
//! Committed shapes are queued here and handed to the host, which sends
//! each one at most once. Delivery is best effort: there is no retry, no
//! ordering between in-flight requests, and a failed send never touches
//! local state. The local session is the source of truth; the backend is a
//! mirror that may lag or diverge.

#[cfg(test)]
#[path = "outbox_test.rs"]
mod outbox_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::hex::HexCoord;
use crate::session::Shape;

/// Endpoint receiving committed circles.
pub const CREATE_CIRCLE_PATH: &str = "/api/create-circle/";

/// Endpoint receiving committed triangles.
pub const CREATE_TRIANGLE_PATH: &str = "/api/create-triangle/";

/// Endpoint serving the shape export download.
pub const EXPORT_PATH: &str = "/api/export-shapes-xlsx/";

/// Endpoint that wipes the backing store.
pub const CLEAR_DB_PATH: &str = "/api/clear-db/";

/// Header carrying the anti-forgery token on every outbound request.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body of a circle notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CirclePayload {
    pub origin: HexCoord,
    pub magnitude: u32,
}

/// Body of a triangle notification. `magnitude` is always 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrianglePayload {
    pub vertices: [HexCoord; 3],
    pub magnitude: u32,
}

/// A shape-completion notification. Serializes as the bare request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShapeEvent {
    Circle(CirclePayload),
    Triangle(TrianglePayload),
}

impl ShapeEvent {
    /// Path this event is posted to.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Circle(_) => CREATE_CIRCLE_PATH,
            Self::Triangle(_) => CREATE_TRIANGLE_PATH,
        }
    }
}

impl From<Shape> for ShapeEvent {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Circle(c) => Self::Circle(CirclePayload { origin: c.center, magnitude: c.radius }),
            Shape::Triangle(t) => Self::Triangle(TrianglePayload { vertices: t.vertices, magnitude: 0 }),
        }
    }
}

/// Hand-off buffer between the engine and whoever performs the requests.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    queue: VecDeque<ShapeEvent>,
}

impl Outbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ShapeEvent) {
        self.queue.push_back(event);
    }

    /// Take every queued event. Each is handed out exactly once.
    pub fn drain(&mut self) -> Vec<ShapeEvent> {
        self.queue.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
