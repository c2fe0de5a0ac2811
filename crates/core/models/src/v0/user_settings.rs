use std::collections::HashMap;

#[cfg(feature = "serde")]
use banter_result::Result;

/// HashMap of user settings
/// Each key is mapped to a tuple consisting of the
/// revision timestamp and serialised data (in JSON format)
pub type UserSettings = HashMap<String, (i64, String)>;

/// Settings key under which sidebar preferences are stored
pub const SIDEBAR_SETTINGS_KEY: &str = "sidebar";

auto_derived!(
    /// Channel that was unread immediately before the user switched into it
    ///
    /// Keeps a just-read channel from jumping out of the unread view for the
    /// remainder of the visit. Maintained by the view-state layer.
    pub struct LastUnreadChannel {
        /// Channel Id
        pub id: String,
        /// Whether the channel had mentions before it was read
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub had_mentions: bool,
    }

    /// Sidebar display preferences
    #[derive(Default)]
    pub struct SidebarPreferences {
        /// Show only unread channels, flattened across categories
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub unread_filter_enabled: bool,
        /// Pull unread channels into a synthetic leading unreads category
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub show_unreads_category: bool,
        /// Track root messages and thread replies separately
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub collapsed_threads_enabled: bool,
    }
);

#[cfg(feature = "serde")]
impl SidebarPreferences {
    /// Decode sidebar preferences from a user's stored settings
    ///
    /// A missing entry yields the defaults. Settings written before the
    /// unreads category existed may carry both display flags; the unreads
    /// category takes precedence and the filter is switched off.
    pub fn from_settings(settings: &UserSettings) -> Result<SidebarPreferences> {
        let mut preferences = match settings.get(SIDEBAR_SETTINGS_KEY) {
            Some((_revision, data)) => {
                serde_json::from_str::<SidebarPreferences>(data).map_err(|_| {
                    create_error!(InvalidPreference {
                        key: SIDEBAR_SETTINGS_KEY.to_string()
                    })
                })?
            }
            None => SidebarPreferences::default(),
        };

        if preferences.show_unreads_category {
            preferences.unread_filter_enabled = false;
        }

        Ok(preferences)
    }
}
