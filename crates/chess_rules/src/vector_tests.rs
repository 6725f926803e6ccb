use super::*;
use crate::types::Position;

fn pos(name: &str) -> Position {
    Position::from_name(name).unwrap()
}

#[test]
fn test_vector_is_total_over_the_board() {
    // every pair of positions yields a direction whose components are signs
    for fc in 0..8i8 {
        for fr in 1..=8i8 {
            for tc in 0..8i8 {
                for tr in 1..=8i8 {
                    let from = Position::new(fc, fr).unwrap();
                    let to = Position::new(tc, tr).unwrap();
                    let (dir, disp) = vector(from, to);
                    let (dx, dy) = dir.delta();
                    assert!((-1..=1).contains(&dx));
                    assert!((-1..=1).contains(&dy));
                    assert_eq!((dx, dy), (disp.dx.signum(), disp.dy.signum()));
                }
            }
        }
    }
}

#[test]
fn test_compass_octants() {
    assert_eq!(vector(pos("E4"), pos("E6")).0, Direction::N);
    assert_eq!(vector(pos("E4"), pos("G6")).0, Direction::NE);
    assert_eq!(vector(pos("E4"), pos("H4")).0, Direction::E);
    assert_eq!(vector(pos("E4"), pos("F3")).0, Direction::SE);
    assert_eq!(vector(pos("E4"), pos("E1")).0, Direction::S);
    assert_eq!(vector(pos("E4"), pos("C2")).0, Direction::SW);
    assert_eq!(vector(pos("E4"), pos("A4")).0, Direction::W);
    assert_eq!(vector(pos("E4"), pos("D5")).0, Direction::NW);
    assert_eq!(vector(pos("E4"), pos("E4")).0, Direction::None);
}

#[test]
fn test_knight_vector_is_diagonal_octant() {
    // the L-shape lands in a diagonal octant with |dx| + |dy| == 3
    let (dir, disp) = vector(pos("B1"), pos("C3"));
    assert_eq!(dir, Direction::NE);
    assert_eq!(disp.dx.abs() + disp.dy.abs(), 3);
}

#[test]
fn test_displacement_magnitude() {
    let (_, disp) = vector(pos("A1"), pos("D5"));
    assert_eq!((disp.dx, disp.dy), (3, 4));
    assert!((disp.magnitude() - 5.0).abs() < f64::EPSILON);

    let (_, same) = vector(pos("A1"), pos("A1"));
    assert_eq!(same.magnitude(), 0.0);
}

#[test]
fn test_direction_classification() {
    for dir in STRAIGHT_DIRECTIONS {
        assert!(dir.is_straight());
        assert!(!dir.is_diagonal());
    }
    for dir in DIAGONAL_DIRECTIONS {
        assert!(dir.is_diagonal());
        assert!(!dir.is_straight());
    }
    assert!(!Direction::None.is_straight());
    assert!(!Direction::None.is_diagonal());
}
