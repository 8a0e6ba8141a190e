use contracts::system::notification_prefs::NotificationPreferences;

use crate::shared::api_utils::{request, Auth, Method};

const PATH: &str = "/api/users/me/notification-preferences";

pub const SAVE_UNAVAILABLE: &str = "Saving notification preferences is not available yet.";

/// Missing preferences (404) fall back to the defaults.
pub async fn fetch_preferences() -> Result<NotificationPreferences, String> {
    match request::<(), NotificationPreferences>(Method::Get, PATH, None, Auth::Bearer).await {
        Ok(prefs) => Ok(prefs),
        Err(failure) if failure.is_not_found() => Ok(NotificationPreferences::default()),
        Err(failure) => Err(failure.message),
    }
}

pub async fn save_preferences(
    prefs: &NotificationPreferences,
) -> Result<NotificationPreferences, String> {
    request(Method::Put, PATH, Some(prefs), Auth::Bearer)
        .await
        .map_err(|failure| failure.or_unavailable(SAVE_UNAVAILABLE))
}
