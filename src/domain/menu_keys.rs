use chrono::{DateTime, Utc};

// Menus are unique by case-insensitive name
pub fn menu_unique_key(name: &str) -> String{
    name.trim().to_lowercase()
}

// Foods are unique by name within one menu
pub fn food_unique_key(menu_id: &str, name: &str) -> String{
    format!("{}-{}", menu_id, name.trim())
}

/// A menu may be limited to a validity window. When both ends are set the
/// start must be strictly before the end; an open end is always accepted.
pub fn check_validity_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>
) -> Result<(), String>{
    match (start_date, end_date) {
        (Some(start), Some(end)) if start >= end => {
            Err("start_date must be before end_date".to_string())
        },
        _ => Ok(())
    }
}
