pub(crate) mod money;
pub(crate) mod time;
