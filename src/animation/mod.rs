pub(crate) mod carousel;
pub(crate) mod fade;
pub(crate) mod smoother;
