use std::collections::HashMap;
use std::sync::Arc;

use banter_models::v0::{
    Category, Channel, ChannelMembership, ChannelMessageCount, LastUnreadChannel,
    SidebarPreferences,
};

/// Read-only snapshot of everything the sidebar derivations consume
///
/// Collections are shared behind `Arc` so the surrounding store can hand the
/// same tables to successive invocations; memoised selectors treat a
/// pointer-equal table as unchanged.
#[derive(Debug, Clone, Default)]
pub struct SidebarSnapshot {
    /// All channels known to the client, by channel id
    pub channels: Arc<HashMap<String, Channel>>,
    /// The current user's memberships, by channel id
    pub memberships: Arc<HashMap<String, ChannelMembership>>,
    /// Message counters, by channel id
    pub message_counts: Arc<HashMap<String, ChannelMessageCount>>,
    /// The current team's categories, in display order
    pub categories: Arc<Vec<Category>>,

    /// Id of the channel the user is currently viewing
    pub current_channel_id: String,
    /// Channel that was unread when the user last switched into it
    pub last_unread_channel: Option<LastUnreadChannel>,
    /// Sidebar display preferences
    pub preferences: SidebarPreferences,
}
