pub(crate) mod gpio;
