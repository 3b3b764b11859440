//! Unit tests for the scene draw list.

use lorise::{Color, DrawCommand, Scene, Vec2};

#[test]
fn test_commands_keep_push_order() {
    let mut scene = Scene::new();
    scene.line(Vec2::ZERO, Vec2::new(1.0, 1.0), Color::WHITE);
    scene.circle(Vec2::new(2.0, 2.0), 5.0, Color::GREEN);
    scene.text(Vec2::new(3.0, 3.0), "hold", Color::RED);

    assert_eq!(scene.len(), 3);
    assert!(matches!(scene.commands()[0], DrawCommand::Line { .. }));
    assert!(matches!(scene.commands()[1], DrawCommand::Circle { .. }));
    assert!(matches!(scene.commands()[2], DrawCommand::Text { .. }));
}

#[test]
fn test_new_scene_is_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.commands().is_empty());
}

#[test]
fn test_cross_expands_to_two_lines() {
    let mut scene = Scene::new();
    scene.cross(Vec2::new(10.0, 20.0), 5.0, Color::WHITE);

    assert_eq!(
        scene.into_commands(),
        vec![
            DrawCommand::Line {
                from: Vec2::new(5.0, 20.0),
                to: Vec2::new(15.0, 20.0),
                color: Color::WHITE,
            },
            DrawCommand::Line {
                from: Vec2::new(10.0, 15.0),
                to: Vec2::new(10.0, 25.0),
                color: Color::WHITE,
            },
        ]
    );
}

#[test]
fn test_ngon_carries_side_count() {
    let mut scene = Scene::new();
    scene.ngon(Vec2::ZERO, 10.0, 3, Color::GREEN);
    scene.ngon(Vec2::ZERO, 10.0, 4, Color::RED);

    let sides: Vec<u32> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Ngon { sides, .. } => Some(*sides),
            _ => None,
        })
        .collect();
    assert_eq!(sides, vec![3, 4]);
}

#[test]
fn test_text_accepts_str_and_string() {
    let mut scene = Scene::new();
    scene.text(Vec2::ZERO, "literal", Color::WHITE);
    scene.text(Vec2::ZERO, String::from("owned"), Color::WHITE);

    let texts: Vec<&str> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["literal", "owned"]);
}
