use nalgebra::{Point2, Vector2};

use crate::body::BodyId;
use crate::state::SystemState;

#[test]
fn test_new_system_is_empty() {
    let system = SystemState::new(2.5);
    assert_eq!(system.body_count(), 0);
    assert_eq!(system.g, 2.5);
    assert_eq!(system.time, 0.0);
    assert_eq!(system.steps, 0);
}

#[test]
fn test_add_body_assigns_sequential_ids() {
    let mut system = SystemState::new(1.0);
    let id1 = system.add_body("a", 1.0, Point2::new(1.0, 0.0), Vector2::zeros(), None);
    let id2 = system.add_body("b", 2.0, Point2::new(2.0, 0.0), Vector2::zeros(), None);

    assert_eq!(system.body_count(), 2);
    assert_eq!(id1, BodyId(0));
    assert_eq!(id2, BodyId(1));
}

#[test]
fn test_alloc_id_never_reuses() {
    let mut system = SystemState::new(1.0);
    let id = system.add_body("a", 1.0, Point2::origin(), Vector2::zeros(), None);
    system.remove_body(id);
    let next = system.add_body("b", 1.0, Point2::origin(), Vector2::zeros(), None);
    assert_ne!(id, next);
}

#[test]
fn test_remove_body() {
    let mut system = SystemState::new(1.0);
    let id = system.add_body("a", 1.0, Point2::origin(), Vector2::zeros(), None);

    let removed = system.remove_body(id);
    assert!(removed.is_some());
    assert_eq!(system.body_count(), 0);
    assert!(system.remove_body(BodyId(999)).is_none());
}

#[test]
fn test_get_and_index_of() {
    let mut system = SystemState::new(1.0);
    let first = system.add_body("a", 1.0, Point2::origin(), Vector2::zeros(), None);
    let second = system.add_body("b", 2.0, Point2::origin(), Vector2::zeros(), None);

    assert_eq!(system.get_body(second).unwrap().mass, 2.0);
    assert_eq!(system.index_of(first), Some(0));
    assert_eq!(system.index_of(second), Some(1));

    system.remove_body(first);
    assert_eq!(system.index_of(second), Some(0));
    assert!(system.index_of(first).is_none());
}

#[test]
fn test_get_body_mut() {
    let mut system = SystemState::new(1.0);
    let id = system.add_body("a", 1.0, Point2::origin(), Vector2::zeros(), None);
    if let Some(body) = system.get_body_mut(id) {
        body.velocity = Vector2::new(1.0, -1.0);
    }
    assert_eq!(system.get_body(id).unwrap().velocity, Vector2::new(1.0, -1.0));
}

#[test]
fn test_totals() {
    let mut system = SystemState::new(1.0);
    system.add_body("a", 10.0, Point2::origin(), Vector2::new(1.0, 0.0), None);
    system.add_body("b", 20.0, Point2::origin(), Vector2::new(0.0, -1.0), None);

    assert_eq!(system.total_mass(), 30.0);
    assert_eq!(system.total_momentum(), Vector2::new(10.0, -20.0));
}
