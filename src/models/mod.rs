pub mod export;
pub mod gog;

pub use export::{ExportedAchievement, ExportedGame};
pub use gog::{
    // Wire shapes
    AchievementItem, AchievementsResponse, GameDetailsResponse, OwnedGamesResponse,
    // Resolved catalog entry
    GameSummary,
};
