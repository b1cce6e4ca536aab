pub(crate) mod runtime;
pub(crate) mod sampler;
pub(crate) mod session;
pub(crate) mod state;
