use crate::model::ConditionCategory;

/// Token used for unknown categories and for points without conditions.
pub const DEFAULT_ICON: &str = "defaultIcon";

/// Display icon for a condition category. Only `Clear` has a night variant.
pub fn icon_token(category: &ConditionCategory, is_night: bool) -> &'static str {
    match category {
        ConditionCategory::Clear if is_night => "ClearNightIcon",
        ConditionCategory::Clear => "ClearIcon",
        ConditionCategory::Thunderstorm => "ThunderstormIcon",
        ConditionCategory::Atmosphere => "AtmosphereIcon",
        ConditionCategory::Clouds => "CloudsIcon",
        ConditionCategory::Drizzle => "DrizzleIcon",
        ConditionCategory::Rain => "RainIcon",
        ConditionCategory::Snow => "SnowIcon",
        ConditionCategory::Mist => "MistIcon",
        ConditionCategory::Unknown(_) => DEFAULT_ICON,
    }
}
