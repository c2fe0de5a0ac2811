use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use banter_models::v0::{Channel, ChannelMembership, LastUnreadChannel};

use crate::SidebarSnapshot;

/// Order unread channels for display
///
/// Muted channels sink below everything else regardless of their mention
/// counters, channels with mentions float to the top, and ties fall back to
/// most recent activity. If `last_unread_channel` names one of the channels,
/// its recorded mention state decides that channel's bucket instead of the
/// live counter, so a just-read channel keeps the position it had.
pub fn sort_unread_channels(
    mut channels: Vec<Channel>,
    memberships: &HashMap<String, ChannelMembership>,
    last_unread_channel: Option<&LastUnreadChannel>,
    collapsed_threads: bool,
) -> Vec<Channel> {
    let is_muted = |channel: &Channel| {
        memberships
            .get(&channel.id)
            .map(|membership| membership.is_muted())
            .unwrap_or(false)
    };

    let has_mentions = |channel: &Channel| {
        if let Some(last_unread) = last_unread_channel {
            if last_unread.id == channel.id {
                return last_unread.had_mentions;
            }
        }

        memberships
            .get(&channel.id)
            .map(|membership| membership.mentions(collapsed_threads) > 0)
            .unwrap_or(false)
    };

    channels.sort_by(|a, b| {
        match (is_muted(a), is_muted(b)) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        match (has_mentions(a), has_mentions(b)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        // ids keep the order deterministic when timestamps collide
        b.last_activity_at(collapsed_threads)
            .cmp(&a.last_activity_at(collapsed_threads))
            .then_with(|| a.id.cmp(&b.id))
    });

    channels
}

/// Resolve the unread set into the ordered list shown in unread-filter mode
///
/// Ids missing from the cache are skipped and archived channels are dropped
/// unless current. While the unread filter is enabled the current channel is
/// always part of the list, even with nothing unread in it. The
/// `last_unread_channel` marker is only honoured while it names the current
/// channel.
pub fn unread_channels(snapshot: &SidebarSnapshot, unread_ids: &HashSet<String>) -> Vec<Channel> {
    let mut channels = unread_ids
        .iter()
        .filter_map(|id| snapshot.channels.get(id))
        .filter(|channel| !channel.is_archived() || channel.id == snapshot.current_channel_id)
        .cloned()
        .collect::<Vec<_>>();

    if snapshot.preferences.unread_filter_enabled
        && !unread_ids.contains(&snapshot.current_channel_id)
    {
        if let Some(channel) = snapshot.channels.get(&snapshot.current_channel_id) {
            channels.push(channel.clone());
        }
    }

    let last_unread_channel = snapshot
        .last_unread_channel
        .as_ref()
        .filter(|last_unread| last_unread.id == snapshot.current_channel_id);

    sort_unread_channels(
        channels,
        &snapshot.memberships,
        last_unread_channel,
        snapshot.preferences.collapsed_threads_enabled,
    )
}
