//! Value types shared by the transition engine: selection [`Region`]s and
//! rope-backed [`Position`]s.

pub mod position;
pub mod region;

pub use position::Position;
pub use region::Region;
