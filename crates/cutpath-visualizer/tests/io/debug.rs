use cutpath_core::{Color, DecodeError, Point2};
use cutpath_visualizer::{parse_descriptor, parse_renderable, DebugFrame, Renderable};
use serde_json::json;

#[test]
fn test_parse_circle_descriptor() {
    let circle = parse_descriptor("Circle((1.0, -2.5), 0.3, (255, 128, 0))").unwrap();
    assert_eq!(
        circle,
        Renderable::Circle {
            center: Point2::new(1.0, -2.5),
            radius: 0.3,
            color: Color::rgb(255, 128, 0),
        }
    );
}

#[test]
fn test_parse_line_descriptor() {
    let line = parse_descriptor("Line((0, 0), (1.5, 2), 0.02, (0, 0, 255))").unwrap();
    assert_eq!(
        line,
        Renderable::Segment {
            p1: Point2::new(0.0, 0.0),
            p2: Point2::new(1.5, 2.0),
            width: 0.02,
            color: Color::rgb(0, 0, 255),
        }
    );
}

#[test]
fn test_unknown_kind() {
    assert!(matches!(
        parse_descriptor("Polygon((0, 0), (1, 1))"),
        Err(DecodeError::UnknownRenderable { .. })
    ));
    assert!(matches!(
        parse_renderable(&json!({ "Arc": { "center": [0.0, 0.0] } })),
        Err(DecodeError::UnknownRenderable { .. })
    ));
}

#[test]
fn test_malformed_descriptor() {
    for bad in [
        "Circle((1.0, 2.0), 0.3)",
        "Circle((1.0, 2.0), 0.3, (255, 0, 0)",
        "Line((0, 0), 1, 2, (0, 0, 0))",
        "Circle((1.0, 2.0), 0.3, (256, 0, 0))",
        "Circle",
    ] {
        assert!(
            matches!(
                parse_descriptor(bad),
                Err(DecodeError::MalformedRenderable { .. })
            ),
            "{bad}"
        );
    }
}

#[test]
fn test_structured_renderables() {
    let circle = parse_renderable(&json!({
        "Circle": { "center": [0.5, 0.5], "radius": 0.1, "color": [0, 255, 0] }
    }))
    .unwrap();
    assert!(matches!(circle, Renderable::Circle { radius, .. } if radius == 0.1));

    let line = parse_renderable(&json!({
        "Line": { "p1": [0.0, 0.0], "p2": [1.0, 0.0], "width": 0.05, "color": [1, 2, 3] }
    }))
    .unwrap();
    assert!(matches!(line, Renderable::Segment { color, .. } if color == Color::rgb(1, 2, 3)));

    assert!(matches!(
        parse_renderable(&json!({ "Circle": { "center": [0.5, 0.5] } })),
        Err(DecodeError::MalformedRenderable { .. })
    ));
}

#[test]
fn test_frame_keeps_good_renderables() {
    let frame = DebugFrame::decode(&json!({
        "renderables": [
            "Circle((0, 0), 1, (0, 0, 0))",
            "Spiral(1)",
            { "Line": { "p1": [0, 0], "p2": [1, 1], "width": 0.1, "color": [9, 9, 9] } },
            17
        ],
        "messages": ["a", true]
    }));
    assert_eq!(frame.renderables.len(), 2);
    assert_eq!(frame.messages, vec!["a".to_string(), "true".to_string()]);
}

#[test]
fn test_frame_of_unexpected_shape_is_empty() {
    assert!(DebugFrame::decode(&json!(null)).is_empty());
    assert!(DebugFrame::decode(&json!(["Circle((0, 0), 1, (0, 0, 0))"])).is_empty());
    assert!(DebugFrame::decode(&json!({ "renderables": "nope" })).is_empty());
}
