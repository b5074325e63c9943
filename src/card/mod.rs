//! Boundary model: the card request, the output size table, and render options.

pub(crate) mod model;
