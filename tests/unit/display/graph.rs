use super::*;
use crate::display::sink::RecordingSink;

fn column(graph: &BarGraph, col: usize) -> Vec<Rgb8> {
    (0..HEIGHT).map(|row| graph.pixels()[row * WIDTH + col]).collect()
}

#[test]
fn half_bar_fills_bottom_four_pixels() {
    let mut graph = BarGraph::default();
    graph.add_bar(0.5);
    let col = column(&graph, 7);
    assert_eq!(&col[..4], &[[0, 0, 0]; 4]);
    assert_eq!(&col[4..], &[[255, 0, 0]; 4]);
}

#[test]
fn fractional_top_pixel_is_dimmed() {
    let mut graph = BarGraph::new([0, 200, 100]);
    graph.add_bar(0.3);
    let col = column(&graph, 7);
    assert_eq!(col[7], [0, 200, 100]);
    assert_eq!(col[6], [0, 200, 100]);
    assert_eq!(col[5], [0, 80, 40]);
    assert_eq!(col[4], [0, 0, 0]);
}

#[test]
fn bars_move_left_one_column_per_add() {
    let mut graph = BarGraph::default();
    graph.add_bar(1.0);
    graph.add_bar(0.0);
    graph.add_bar(0.25);

    assert_eq!(column(&graph, 5), vec![[255, 0, 0]; 8]);
    assert_eq!(column(&graph, 6), vec![[0, 0, 0]; 8]);
    let right = column(&graph, 7);
    assert_eq!(right.iter().filter(|&&p| p == [255, 0, 0]).count(), 2);
    assert_eq!(column(&graph, 0), vec![[0, 0, 0]; 8]);
}

#[test]
fn out_of_range_values_are_clamped() {
    let mut graph = BarGraph::default();
    graph.add_bar(7.0);
    assert_eq!(column(&graph, 7), vec![[255, 0, 0]; 8]);
    graph.add_bar(-1.0);
    assert_eq!(column(&graph, 7), vec![[0, 0, 0]; 8]);
    graph.add_bar(f64::NAN);
    assert_eq!(column(&graph, 7), vec![[0, 0, 0]; 8]);
}

#[test]
fn push_and_clear() {
    let mut graph = BarGraph::default();
    graph.add_bar(1.0);
    let mut sink = RecordingSink::new();
    graph.push_to(&mut sink).unwrap();
    assert_eq!(sink.last(), Some(graph.pixels()));

    graph.clear();
    assert!(graph.pixels().iter().all(|&p| p == [0, 0, 0]));
}
