use super::*;
use crate::foundation::core::{HEIGHT, WIDTH};
use crate::layer::static_layer::StaticLayer;

fn dot_at(row: usize, col: usize) -> Layer {
    let frame = Frame::from_fn(|r, c| {
        if (r, c) == (row, col) {
            ([255, 255, 255], 255)
        } else {
            ([0, 0, 0], 255)
        }
    });
    StaticLayer::new("dot", frame).into()
}

fn gradient() -> Layer {
    let frame = Frame::from_fn(|r, c| ([(r * 30) as u8, (c * 30) as u8, 7], (r * 8 + c) as u8 * 3));
    StaticLayer::new("gradient", frame).into()
}

fn lit(frame: &Frame) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            if frame.pixel(row, col).0 == [255, 255, 255] {
                out.push((row, col));
            }
        }
    }
    out
}

#[test]
fn east_without_padding_visits_each_column_once() {
    let layer = ScrollingLayer::new(dot_at(0, 0), Direction::E, 0);
    let mut seen = Vec::new();
    for i in 0..8 {
        let spots = lit(&layer.render(FrameIndex(i)));
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].0, 0);
        seen.push(spots[0].1);
    }
    assert_eq!(seen, (0..8).collect::<Vec<_>>());
    assert_eq!(layer.render(FrameIndex(8)), layer.render(FrameIndex(0)));
}

#[test]
fn west_moves_towards_lower_columns() {
    let layer = ScrollingLayer::new(dot_at(2, 0), Direction::W, 0);
    assert_eq!(lit(&layer.render(FrameIndex(1))), vec![(2, 7)]);
    assert_eq!(lit(&layer.render(FrameIndex(3))), vec![(2, 5)]);
}

#[test]
fn south_and_north_move_rows() {
    let south = ScrollingLayer::new(dot_at(0, 4), Direction::S, 0);
    assert_eq!(lit(&south.render(FrameIndex(3))), vec![(3, 4)]);

    let north = ScrollingLayer::new(dot_at(0, 4), Direction::N, 0);
    assert_eq!(lit(&north.render(FrameIndex(1))), vec![(7, 4)]);
}

#[test]
fn padding_inserts_transparent_gap() {
    let layer = ScrollingLayer::new(dot_at(0, 7), Direction::E, 8);
    assert_eq!(layer.frame_count(), 16);

    // Column 7 moves into the padding at index 1 and the padding slides in from the left.
    let frame = layer.render(FrameIndex(1));
    assert!(lit(&frame).is_empty());
    assert_eq!(frame.pixel(0, 0), ([0, 0, 0], 0));
    assert_eq!(frame.pixel(0, 1), ([0, 0, 0], 255));

    // At index 8 the window shows only padding.
    assert!(layer.render(FrameIndex(8)).is_transparent());

    // And the dot comes back round on the left at index 9.
    assert_eq!(lit(&layer.render(FrameIndex(9))), vec![(0, 0)]);
}

#[test]
fn render_repeats_after_frame_count() {
    for direction in [Direction::N, Direction::S, Direction::E, Direction::W] {
        for padding in [0usize, 1, 3, 8] {
            let layer = ScrollingLayer::new(gradient(), direction, padding);
            let period = 8 + padding as u64;
            assert_eq!(layer.frame_count(), period);
            for i in 0..(2 * period) {
                assert_eq!(
                    layer.render(FrameIndex(i)),
                    layer.render(FrameIndex(i + period)),
                    "{direction} padding={padding} i={i}"
                );
            }
        }
    }
}

#[test]
fn index_zero_is_the_unshifted_image() {
    let inner = gradient();
    let layer = ScrollingLayer::new(inner.clone(), Direction::N, 5);
    assert_eq!(layer.render(FrameIndex(0)), inner.render(FrameIndex(0)));
}
