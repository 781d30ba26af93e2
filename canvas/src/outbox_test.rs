use serde_json::json;

use super::*;
use crate::session::{Circle, Triangle};

fn cell(q: i32, r: i32) -> HexCoord {
    HexCoord::from_axial(q, r)
}

#[test]
fn circle_event_body_matches_wire_format() {
    let event = ShapeEvent::from(Shape::Circle(Circle { center: cell(1, -1), radius: 4 }));
    assert_eq!(event.path(), "/api/create-circle/");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "origin": { "q": 1, "r": -1, "s": 0 }, "magnitude": 4 })
    );
}

#[test]
fn triangle_event_body_has_zero_magnitude() {
    let vertices = [cell(0, 0), cell(1, -1), cell(0, -1)];
    let event = ShapeEvent::from(Shape::Triangle(Triangle { vertices }));
    assert_eq!(event.path(), "/api/create-triangle/");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "vertices": [
                { "q": 0, "r": 0, "s": 0 },
                { "q": 1, "r": -1, "s": 0 },
                { "q": 0, "r": -1, "s": 1 },
            ],
            "magnitude": 0,
        })
    );
}

#[test]
fn event_serializes_as_bare_payload() {
    let circle = CirclePayload { origin: cell(2, -1), magnitude: 5 };
    let triangle = TrianglePayload { vertices: [cell(0, 0), cell(2, 0), cell(0, 2)], magnitude: 0 };
    assert_eq!(
        serde_json::to_value(ShapeEvent::Circle(circle.clone())).unwrap(),
        serde_json::to_value(&circle).unwrap()
    );
    assert_eq!(
        serde_json::to_value(ShapeEvent::Triangle(triangle.clone())).unwrap(),
        serde_json::to_value(&triangle).unwrap()
    );
}

#[test]
fn circle_event_body_has_no_variant_tag() {
    let event = ShapeEvent::Circle(CirclePayload { origin: cell(0, 0), magnitude: 1 });
    let body = serde_json::to_value(&event).unwrap();
    let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["magnitude".to_owned(), "origin".to_owned()]);
}

#[test]
fn triangle_payload_parses_backend_shape() {
    let payload: TrianglePayload = serde_json::from_value(json!({
        "vertices": [
            { "q": 0, "r": 0, "s": 0 },
            { "q": 1, "r": -1, "s": 0 },
            { "q": 0, "r": -1, "s": 1 },
        ],
        "magnitude": 0,
    }))
    .unwrap();
    assert_eq!(payload.vertices[1], cell(1, -1));
}

#[test]
fn circle_payload_rejects_negative_magnitude() {
    let result = serde_json::from_value::<CirclePayload>(json!({
        "origin": { "q": 0, "r": 0, "s": 0 },
        "magnitude": -1,
    }));
    assert!(result.is_err());
}

#[test]
fn drain_hands_out_each_event_once() {
    let mut outbox = Outbox::new();
    outbox.push(ShapeEvent::from(Shape::Circle(Circle { center: cell(0, 0), radius: 1 })));
    outbox.push(ShapeEvent::from(Shape::Circle(Circle { center: cell(1, 0), radius: 2 })));
    assert_eq!(outbox.len(), 2);

    let first = outbox.drain();
    assert_eq!(first.len(), 2);
    assert!(outbox.is_empty());
    assert!(outbox.drain().is_empty());
}

#[test]
fn drain_preserves_commit_order() {
    let mut outbox = Outbox::new();
    for q in 0..3 {
        outbox.push(ShapeEvent::from(Shape::Circle(Circle { center: cell(q, 0), radius: 0 })));
    }
    let origins: Vec<_> = outbox
        .drain()
        .into_iter()
        .map(|e| match e {
            ShapeEvent::Circle(p) => p.origin,
            ShapeEvent::Triangle(p) => p.vertices[0],
        })
        .collect();
    assert_eq!(origins, vec![cell(0, 0), cell(1, 0), cell(2, 0)]);
}
