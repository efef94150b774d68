//! Tactical queries over the grid: action hitboxes, movement reachability,
//! and region outlining. Every query here is a pure function of its
//! inputs; terrain is only ever read through
//! [HeightQuery](crate::terrain::HeightQuery).

mod border;
mod hitbox;
mod reach;

pub use self::{border::*, hitbox::*, reach::*};
