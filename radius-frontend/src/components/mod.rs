mod controls;
mod map;
mod place_search;

pub use self::{controls::*, map::*, place_search::*};
