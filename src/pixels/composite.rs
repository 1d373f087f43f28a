use std::ops::Add;

use crate::foundation::core::Rgb8;
use crate::pixels::frame::Frame;

/// Composite `front` over `back`, returning a new frame.
///
/// Per pixel, with `a1 = front.alpha / 255` and `a2 = back.alpha / 255`:
///
/// - the back pixel is attenuated by what the front leaves uncovered:
///   `a2' = a2 * (1 - a1)`
/// - output alpha is `a1 + a2'`
/// - output colour is the `a1`/`a2'` weighted average of both colours
///
/// Blending runs in `f64` and is rounded to the nearest integer at the `u8`
/// boundary. A front pixel with alpha 0 passes the back pixel through
/// untouched, and an opaque front pixel replaces the back pixel.
pub fn compose(front: &Frame, back: &Frame) -> Frame {
    Frame::from_fn(|row, col| over_pixel(front.pixel(row, col), back.pixel(row, col)))
}

/// [`compose`] with `None` as the additive identity.
///
/// `compose_opt(Some(f), None) == Some(f)` and `compose_opt(None, Some(f)) == Some(f)`,
/// which lets an empty or single-element list of frames be reduced by repeated
/// composition.
pub fn compose_opt(front: Option<Frame>, back: Option<Frame>) -> Option<Frame> {
    match (front, back) {
        (Some(f), Some(b)) => Some(compose(&f, &b)),
        (Some(f), None) => Some(f),
        (None, back) => back,
    }
}

/// Fold frames given in back-to-front order into one.
///
/// Each frame is painted over everything before it, so the last frame ends up
/// nearest the viewer. Returns `None` for an empty input.
pub fn composite_back_to_front<I>(frames: I) -> Option<Frame>
where
    I: IntoIterator<Item = Frame>,
{
    frames
        .into_iter()
        .fold(None, |acc, frame| compose_opt(Some(frame), acc))
}

impl Frame {
    /// Composite `self` over `back`. See [`compose`].
    pub fn over(&self, back: &Frame) -> Frame {
        compose(self, back)
    }
}

/// `front + back` composites `front` over `back`. Order matters.
impl Add for Frame {
    type Output = Frame;

    fn add(self, back: Frame) -> Frame {
        compose(&self, &back)
    }
}

impl Add<&Frame> for &Frame {
    type Output = Frame;

    fn add(self, back: &Frame) -> Frame {
        compose(self, back)
    }
}

/// `front + None` is `front`.
impl Add<Option<Frame>> for Frame {
    type Output = Frame;

    fn add(self, back: Option<Frame>) -> Frame {
        match back {
            Some(back) => compose(&self, &back),
            None => self,
        }
    }
}

fn over_pixel(front: (Rgb8, u8), back: (Rgb8, u8)) -> (Rgb8, u8) {
    let (f_rgb, f_a) = front;
    let (b_rgb, b_a) = back;
    if f_a == 0 {
        return back;
    }

    let a1 = f64::from(f_a) / 255.0;
    let a2 = f64::from(b_a) / 255.0 * (1.0 - a1);
    let total = a1 + a2;
    let out_a = to_u8(total * 255.0);
    if out_a == 0 || total <= 0.0 {
        return ([0, 0, 0], 0);
    }

    let mut out = [0u8; 3];
    for i in 0..3 {
        let c = (f64::from(f_rgb[i]) * a1 + f64::from(b_rgb[i]) * a2) / total;
        out[i] = to_u8(c);
    }
    (out, out_a)
}

fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/pixels/composite.rs"]
mod tests;
