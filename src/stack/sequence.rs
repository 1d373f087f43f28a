use crate::foundation::core::FrameIndex;
use crate::pixels::frame::Frame;
use crate::stack::layer_stack::LayerStack;

/// Lazy, restartable sequence of composited frames.
///
/// Each item is rendered on demand from the stack; nothing is carried between
/// items, so [`FrameSequence::restart`] (or cloning) replays the exact same
/// frames.
#[derive(Clone, Debug)]
pub struct FrameSequence<'a> {
    stack: &'a LayerStack,
    next: u64,
    end: Option<u64>,
}

impl<'a> FrameSequence<'a> {
    /// Frames `0..n`.
    pub fn finite(stack: &'a LayerStack, n: u64) -> Self {
        Self {
            stack,
            next: 0,
            end: Some(n),
        }
    }

    /// Frames `0, 1, 2, ...` without end.
    pub fn looping(stack: &'a LayerStack) -> Self {
        Self {
            stack,
            next: 0,
            end: None,
        }
    }

    /// Limit to the first `n` frames from the current position.
    pub fn take_frames(mut self, n: u64) -> Self {
        self.end = Some(self.next.saturating_add(n));
        self
    }

    /// Rewind to index 0.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// Index of the next frame to be produced.
    pub fn position(&self) -> FrameIndex {
        FrameIndex(self.next)
    }

    /// Frames left, `None` when endless.
    pub fn remaining(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_sub(self.next))
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.end.is_some_and(|end| self.next >= end) {
            return None;
        }
        let frame = self.stack.render_composite(FrameIndex(self.next));
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => {
                let n = usize::try_from(n).unwrap_or(usize::MAX);
                (n, Some(n))
            }
            None => (usize::MAX, None),
        }
    }
}
