pub mod models {
    pub mod event;
    pub mod team;
}

pub mod dto {
    pub mod common;
    pub mod event;
    pub mod team;
}

pub mod error;
pub mod store;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    event::{Event, Match},
    team::Team,
};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    event::{EventDto, MatchDto},
    team::TeamDto,
};

pub use store::ClubStore;
