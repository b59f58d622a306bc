pub(crate) mod element;
pub(crate) mod offset;
pub(crate) mod position;
