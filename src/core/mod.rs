pub mod ballistics;
pub mod duel;
pub mod error;
pub mod geometry;
pub mod shot;
pub mod window;
