pub(crate) mod animator;
pub(crate) mod cancel;
pub(crate) mod graph;
pub(crate) mod sink;
