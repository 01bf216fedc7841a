pub(crate) mod background;
pub(crate) mod controller;
pub(crate) mod parallax;
pub(crate) mod reveal;
pub(crate) mod session;
pub(crate) mod text;
pub(crate) mod tilt;
