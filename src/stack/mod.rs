pub(crate) mod layer_ref;
pub(crate) mod layer_stack;
pub(crate) mod sequence;
