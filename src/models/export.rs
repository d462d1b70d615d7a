use serde::{Deserialize, Serialize, Serializer};

/// One exported game, written as `<appid>.json`
///
/// The field names match the format consumed by multi-platform achievement
/// aggregators, hence the mixed naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedGame {
    pub name: String,
    pub platform: String,
    /// Not populated by this exporter
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Not populated by this exporter
    pub description: String,
    pub method: String,
    #[serde(rename = "appid")]
    pub app_id: u64,
    pub achievements: Vec<ExportedAchievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedAchievement {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// 1 when the achievement is hidden until unlocked, otherwise 0
    pub hidden: u8,
    pub id: u32,
    pub unlocked: bool,
    #[serde(rename = "apiName")]
    pub api_name: String,
    #[serde(rename = "getglobalpercentage", serialize_with = "whole_as_integer")]
    pub global_percentage: f64,
    pub difficulty: u32,
}

/// Writes `0` rather than `0.0` so reserved percentages look like the
/// files other exporters produce.
fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> ExportedGame {
        ExportedGame {
            name: "Gwent".to_string(),
            platform: "GOG".to_string(),
            image_url: String::new(),
            description: String::new(),
            method: "GOG API".to_string(),
            app_id: 1971477531,
            achievements: vec![ExportedAchievement {
                name: "First Win".to_string(),
                description: "Win a match".to_string(),
                image_url: "https://images.gog.com/win.png".to_string(),
                hidden: 0,
                id: 0,
                unlocked: true,
                api_name: "WIN_1".to_string(),
                global_percentage: 0.0,
                difficulty: 0,
            }],
        }
    }

    #[test]
    fn test_exported_game_field_names() {
        let value = serde_json::to_value(sample_game()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["achievements", "appid", "description", "imageUrl", "method", "name", "platform"]
        );

        let achievement = value["achievements"][0].as_object().unwrap();
        let mut keys: Vec<&str> = achievement.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "apiName",
                "description",
                "difficulty",
                "getglobalpercentage",
                "hidden",
                "id",
                "imageUrl",
                "name",
                "unlocked"
            ]
        );
    }

    #[test]
    fn test_field_order_follows_declaration() {
        let json = serde_json::to_string(&sample_game()).unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let appid_at = json.find("\"appid\"").unwrap();
        let achievements_at = json.find("\"achievements\"").unwrap();

        assert!(name_at < appid_at && appid_at < achievements_at);
    }

    #[test]
    fn test_whole_percentage_serializes_as_integer() {
        let json = serde_json::to_string(&sample_game()).unwrap();
        assert!(
            json.contains(r#""getglobalpercentage":0,"#),
            "Expected integer percentage in {}",
            json
        );
    }

    #[test]
    fn test_fractional_percentage_is_kept() {
        let mut game = sample_game();
        game.achievements[0].global_percentage = 12.5;

        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains(r#""getglobalpercentage":12.5"#));
    }

    #[test]
    fn test_exported_game_round_trip() {
        let original = sample_game();

        let json = serde_json::to_string_pretty(&original).unwrap();
        let deserialized: ExportedGame = serde_json::from_str(&json).unwrap();

        assert_eq!(original, deserialized);
    }
}
