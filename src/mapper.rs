use crate::models::{AchievementItem, ExportedAchievement, ExportedGame, GameSummary};

/// Platform name written into every exported file
pub const PLATFORM: &str = "GOG";
/// How the data was obtained, as recorded in the exported file
pub const METHOD: &str = "GOG API";

/// Build the exported document for a game from its achievements, keeping their order
pub fn map_game(summary: &GameSummary, achievements: &[AchievementItem]) -> ExportedGame {
    ExportedGame {
        name: summary.title.clone(),
        platform: PLATFORM.to_string(),
        image_url: String::new(),
        description: String::new(),
        method: METHOD.to_string(),
        app_id: summary.id,
        achievements: achievements.iter().map(map_achievement).collect(),
    }
}

pub fn map_achievement(item: &AchievementItem) -> ExportedAchievement {
    ExportedAchievement {
        name: item.name.clone(),
        description: item.description.clone(),
        image_url: item.unlocked_image_url.clone(),
        hidden: if item.visible { 0 } else { 1 },
        id: 0,
        unlocked: item.unlocked_at.is_some(),
        api_name: item.key.clone(),
        global_percentage: 0.0,
        difficulty: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn summary() -> GameSummary {
        GameSummary {
            id: 1207664643,
            title: "Heroes of Might and Magic 3".to_string(),
        }
    }

    fn item(key: &str, visible: bool, unlocked: bool) -> AchievementItem {
        AchievementItem {
            key: key.to_string(),
            visible,
            name: format!("{} name", key),
            description: format!("{} description", key),
            unlocked_image_url: format!("https://images.gog.com/{}.png", key),
            unlocked_at: unlocked.then(|| Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()),
        }
    }

    #[test]
    fn test_hidden_locked_achievement() {
        let exported = map_achievement(&item("SECRET", false, false));

        assert_eq!(exported.hidden, 1, "Invisible achievements should be hidden");
        assert!(!exported.unlocked, "No unlock date means locked");
    }

    #[test]
    fn test_visible_unlocked_achievement() {
        let exported = map_achievement(&item("OPEN", true, true));

        assert_eq!(exported.hidden, 0);
        assert!(exported.unlocked);
        assert_eq!(exported.api_name, "OPEN");
        assert_eq!(exported.name, "OPEN name");
        assert_eq!(exported.description, "OPEN description");
        assert_eq!(exported.image_url, "https://images.gog.com/OPEN.png");
    }

    #[test]
    fn test_reserved_achievement_fields_stay_default() {
        let exported = map_achievement(&item("ANY", true, true));

        assert_eq!(exported.id, 0);
        assert_eq!(exported.global_percentage, 0.0);
        assert_eq!(exported.difficulty, 0);
    }

    #[test]
    fn test_map_game() {
        let achievements = vec![item("A", true, false), item("B", false, true)];
        let game = map_game(&summary(), &achievements);

        assert_eq!(game.name, "Heroes of Might and Magic 3");
        assert_eq!(game.platform, "GOG");
        assert_eq!(game.method, "GOG API");
        assert_eq!(game.app_id, 1207664643);
        assert_eq!(game.image_url, "");
        assert_eq!(game.description, "");

        let keys: Vec<&str> = game.achievements.iter().map(|a| a.api_name.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"], "Achievement order should be preserved");
    }

    #[test]
    fn test_map_achievement_with_defaults() {
        // A record with every optional field missing still maps
        let exported = map_achievement(&AchievementItem::default());

        assert_eq!(exported.hidden, 1);
        assert!(!exported.unlocked);
        assert_eq!(exported.api_name, "");
    }
}
