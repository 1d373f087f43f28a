pub(crate) mod effect;
pub(crate) mod flash;
pub(crate) mod model;
pub(crate) mod scroll;
pub(crate) mod static_layer;
