pub(crate) mod inspect;
pub(crate) mod prune;
pub(crate) mod serve;
