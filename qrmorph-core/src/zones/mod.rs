pub(crate) mod indexer;
pub(crate) mod mapper;
