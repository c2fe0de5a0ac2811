use std::collections::HashSet;

use banter_models::v0::{ChannelMembership, ChannelMessageCount};

use crate::SidebarSnapshot;

/// Unread counters derived for a single channel
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct UnreadCount {
    /// Whether the channel should be presented as unread
    pub show_unread: bool,
    /// Number of unread messages
    pub messages: i64,
    /// Number of unread mentions
    pub mentions: i64,
}

/// Derive unread counters for one channel
///
/// A channel with no membership or no message counter on record has nothing
/// unread. Muting does not affect the result; muted channels still read as
/// unread and only sort differently.
pub fn calculate_unread_count(
    message_count: Option<&ChannelMessageCount>,
    membership: Option<&ChannelMembership>,
    collapsed_threads: bool,
) -> UnreadCount {
    let (message_count, membership) = match (message_count, membership) {
        (Some(message_count), Some(membership)) => (message_count, membership),
        _ => return UnreadCount::default(),
    };

    let messages =
        message_count.visible(collapsed_threads) - membership.read_messages(collapsed_threads);
    let mentions = membership.mentions(collapsed_threads);

    UnreadCount {
        show_unread: mentions > 0 || messages > 0,
        messages,
        mentions,
    }
}

/// Collect the set of unread channel ids for the current team
///
/// Archived channels only qualify while they are the current channel. If the
/// current channel was unread just before the user opened it, the
/// `last_unread_channel` marker holds it in the set so it keeps its place for
/// the remainder of the visit.
pub fn unread_channel_ids(snapshot: &SidebarSnapshot) -> HashSet<String> {
    let collapsed_threads = snapshot.preferences.collapsed_threads_enabled;

    let mut unread_ids = snapshot
        .channels
        .values()
        .filter(|channel| !channel.is_archived() || channel.id == snapshot.current_channel_id)
        .filter(|channel| {
            calculate_unread_count(
                snapshot.message_counts.get(&channel.id),
                snapshot.memberships.get(&channel.id),
                collapsed_threads,
            )
            .show_unread
        })
        .map(|channel| channel.id.clone())
        .collect::<HashSet<_>>();

    if let Some(last_unread) = &snapshot.last_unread_channel {
        if last_unread.id == snapshot.current_channel_id
            && snapshot.channels.contains_key(&last_unread.id)
            && snapshot.memberships.contains_key(&last_unread.id)
        {
            unread_ids.insert(last_unread.id.clone());
        }
    }

    unread_ids
}

/// Team-wide unread aggregate
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct UnreadStatus {
    /// Total number of unread messages
    pub messages: i64,
    /// Total number of unread mentions
    pub mentions: i64,
}

impl UnreadStatus {
    /// Whether anything warrants an unread indicator
    pub fn show_unread(&self) -> bool {
        self.mentions > 0 || self.messages > 0
    }
}

/// Aggregate unread counters across every channel the user is a member of
///
/// Muted channels contribute nothing; their unreads only surface once the
/// user visits them. Archived channels and channels missing from the cache
/// contribute nothing either.
pub fn unread_status(snapshot: &SidebarSnapshot) -> UnreadStatus {
    let collapsed_threads = snapshot.preferences.collapsed_threads_enabled;
    let mut status = UnreadStatus::default();

    for (channel_id, membership) in snapshot.memberships.iter() {
        match snapshot.channels.get(channel_id) {
            Some(channel) if !channel.is_archived() => {}
            _ => continue,
        }

        if membership.is_muted() {
            continue;
        }

        let unread = calculate_unread_count(
            snapshot.message_counts.get(channel_id),
            Some(membership),
            collapsed_threads,
        );

        if unread.show_unread {
            status.messages += unread.messages;
        }

        status.mentions += unread.mentions;
    }

    status
}
