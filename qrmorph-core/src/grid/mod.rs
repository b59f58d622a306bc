pub(crate) mod encode;
pub(crate) mod pixel_grid;
