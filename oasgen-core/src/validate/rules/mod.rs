pub(crate) mod document;
pub(crate) mod parameters;
pub(crate) mod path_item;
