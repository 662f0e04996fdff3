pub mod events;
pub mod series;
pub mod summary;
