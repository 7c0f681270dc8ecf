//! Card motion: move ordering and interpolated frame states.

pub(crate) mod motion;
