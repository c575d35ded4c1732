//! Data models for Bookshelf

pub mod favourite;
pub mod user;
pub mod volume;

// Re-export commonly used types
pub use favourite::{Favourite, NewFavourite};
pub use user::{LoginForm, SessionClaims, SignupForm, User};
pub use volume::{Volume, VolumeDetails, VolumeSummary, VolumesResponse};
