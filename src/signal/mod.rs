pub(crate) mod event;
pub(crate) mod subject;
pub(crate) mod value;
