use contracts::domain::a003_emergency_settings::aggregate::EmergencySettings;

use crate::shared::api_utils::{get_json, put_json};

pub async fn fetch_settings() -> Result<EmergencySettings, String> {
    get_json("/api/emergency-settings").await
}

pub async fn save_settings(settings: &EmergencySettings) -> Result<EmergencySettings, String> {
    put_json("/api/emergency-settings", settings).await
}
