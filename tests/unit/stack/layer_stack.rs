use super::*;
use crate::foundation::error::ErrorKind;
use serde_json::json;

fn solid(rgb: Rgb8, alpha: u8) -> (Vec<Rgb8>, Vec<u8>) {
    (vec![rgb; PIXEL_COUNT], vec![alpha; PIXEL_COUNT])
}

fn red_blue() -> LayerStack {
    let mut stack = LayerStack::new("rb");
    let (rgb, a) = solid([255, 0, 0], 255);
    stack.add_layer(&rgb, &a, "red").unwrap();
    let (rgb, a) = solid([0, 0, 255], 255);
    stack.add_layer(&rgb, &a, "blue").unwrap();
    stack
}

#[test]
fn last_added_opaque_layer_is_on_top() {
    let stack = red_blue();
    let out = stack.render_composite(FrameIndex(0));
    assert_eq!(out, Frame::filled([0, 0, 255], 255));
    assert!(stack.pixels_at(FrameIndex(3), true).iter().all(|&p| p == [0, 0, 255]));
}

#[test]
fn empty_stack_renders_transparent() {
    let stack = LayerStack::default();
    assert_eq!(stack.name(), "New Image");
    assert!(stack.render_composite(FrameIndex(0)).is_transparent());
    assert_eq!(stack.period(), 1);
}

#[test]
fn single_layer_renders_itself() {
    let mut stack = LayerStack::new("one");
    let frame = Frame::from_fn(|r, c| ([r as u8, c as u8, 1], (r * 8 + c) as u8));
    stack.add_frame("only", frame.clone()).unwrap();
    assert_eq!(stack.render_composite(FrameIndex(9)), frame);
}

#[test]
fn duplicate_names_are_rejected_including_first_layer() {
    let mut stack = red_blue();
    let (rgb, a) = solid([1, 1, 1], 1);
    assert_eq!(
        stack.add_layer(&rgb, &a, "red").unwrap_err().kind(),
        ErrorKind::DuplicateName
    );
    assert_eq!(
        stack.add_layer(&rgb, &a, "blue").unwrap_err().kind(),
        ErrorKind::DuplicateName
    );
    assert_eq!(stack.len(), 2);
}

#[test]
fn add_layer_checks_shape() {
    let mut stack = LayerStack::new("s");
    let rgb = vec![[0u8; 3]; 10];
    let alpha = vec![0u8; PIXEL_COUNT];
    assert_eq!(
        stack.add_layer(&rgb, &alpha, "bad").unwrap_err().kind(),
        ErrorKind::Shape
    );
    assert!(stack.is_empty());
}

#[test]
fn wrap_by_name_or_index_replaces_in_place() {
    let mut stack = red_blue();
    stack.add_effect_flashing("blue", vec![255, 0]).unwrap();
    stack.add_effect_scrolling(0usize, Direction::E, 2).unwrap();

    assert!(matches!(stack.layers()[0], Layer::Scrolling(_)));
    assert!(matches!(stack.layers()[1], Layer::Flashing(_)));
    assert_eq!(stack.names().collect::<Vec<_>>(), vec!["red", "blue"]);
    assert_eq!(stack.period(), 10);

    // Blue is hidden on odd frames, letting red show through.
    assert_eq!(
        stack.render_composite(FrameIndex(0)),
        Frame::filled([0, 0, 255], 255)
    );
    let odd = stack.render_composite(FrameIndex(1));
    assert_eq!(odd.pixel(0, 5), ([255, 0, 0], 255));
}

#[test]
fn effects_stack_when_wrapping_twice() {
    let mut stack = red_blue();
    stack.wrap_layer("red", &Effect::scroll()).unwrap();
    stack.wrap_layer("red", &Effect::flash()).unwrap();
    assert_eq!(stack.get("red").unwrap().depth(), 2);
}

#[test]
fn bad_references_fail_with_distinct_kinds() {
    let mut stack = red_blue();
    assert_eq!(
        stack.wrap_layer("green", &Effect::flash()).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        stack.wrap_layer(2usize, &Effect::flash()).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        stack.add_effect_flashing("red", vec![]).unwrap_err().kind(),
        ErrorKind::Config
    );
    // Failed wraps leave the stack untouched.
    assert_eq!(stack, red_blue());
}

#[test]
fn repeated_wraps_keep_the_layer_in_place() {
    let mut stack = red_blue();
    for _ in 0..500 {
        stack.add_effect_scrolling("red", Direction::N, 0).unwrap();
    }
    let before = stack.clone();
    assert_eq!(
        stack.add_effect_flashing(0usize, vec![]).unwrap_err().kind(),
        ErrorKind::Config
    );
    assert_eq!(stack, before);

    let red = stack.get("red").unwrap();
    assert_eq!(red.name(), "red");
    assert_eq!(red.depth(), 500);
    assert_eq!(red.period(), 8);
    assert_eq!(stack.layer_index("red"), Some(0));
    assert_eq!(
        stack.render_composite(FrameIndex(3)),
        Frame::filled([0, 0, 255], 255)
    );
}

#[test]
fn layer_ref_from_json() {
    assert_eq!(
        LayerRef::from_json(&json!("bg")).unwrap(),
        LayerRef::Name("bg".into())
    );
    assert_eq!(LayerRef::from_json(&json!(3)).unwrap(), LayerRef::Index(3));
    for bad in [json!(-1), json!(1.5), json!(null), json!([0]), json!(true)] {
        assert_eq!(
            LayerRef::from_json(&bad).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}

#[test]
fn parallel_and_serial_sequences_match() {
    let mut stack = red_blue();
    let dots = Frame::from_fn(|r, c| {
        if (r + c) % 3 == 0 {
            ([0, 255, 0], 180)
        } else {
            ([0, 0, 0], 0)
        }
    });
    stack.add_frame("dots", dots).unwrap();
    stack.add_effect_scrolling("dots", Direction::S, 3).unwrap();
    stack.add_effect_flashing("blue", vec![255, 128, 0]).unwrap();

    let n = stack.period() * 2;
    let parallel = stack.render_sequence(n);
    let serial = stack.render_sequence_serial(n);
    assert_eq!(parallel.len() as u64, n);
    assert_eq!(parallel, serial);

    for (i, frame) in parallel.iter().enumerate() {
        assert_eq!(frame, &stack.render_composite(FrameIndex(i as u64)));
    }
}

#[test]
fn frame_sequence_is_lazy_and_restartable() {
    let mut stack = red_blue();
    stack.add_effect_flashing("blue", vec![255, 0]).unwrap();

    let mut seq = stack.frames().take_frames(3);
    assert_eq!(seq.size_hint(), (3, Some(3)));
    let first: Vec<Frame> = seq.by_ref().collect();
    assert_eq!(first.len(), 3);
    assert_eq!(seq.remaining(), Some(0));
    assert!(seq.next().is_none());

    seq.restart();
    assert_eq!(seq.position(), FrameIndex(0));
    let again: Vec<Frame> = seq.collect();
    assert_eq!(first, again);

    let endless = FrameSequence::looping(&stack);
    assert_eq!(endless.remaining(), None);
    assert_eq!(endless.skip(4).take(2).count(), 2);
}
