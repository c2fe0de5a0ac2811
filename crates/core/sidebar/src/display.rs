use banter_models::v0::Channel;

use crate::{channels_in_category_order, unread_channel_ids, unread_channels, SidebarSnapshot};

/// Merge the two ordered views into the final displayed list
///
/// With the unread filter on, only the ordered unread list is shown; with the
/// unreads category on, it is prepended to the category view instead. Both
/// flags at once is a configuration error upstream, resolved here in favour
/// of the filter.
pub fn merge_displayed_channels(
    unread_filter_enabled: bool,
    unread_channels_ordered: Vec<Channel>,
    show_unreads_category: bool,
    channels_in_category_order: Vec<Channel>,
) -> Vec<Channel> {
    if unread_filter_enabled {
        return unread_channels_ordered;
    }

    if show_unreads_category {
        let mut channels = unread_channels_ordered;
        channels.extend(channels_in_category_order);
        return channels;
    }

    channels_in_category_order
}

/// Channels in the order the sidebar presents them
pub fn displayed_channels(snapshot: &SidebarSnapshot) -> Vec<Channel> {
    let unread_ids = unread_channel_ids(snapshot);
    let unread_filter_enabled = snapshot.preferences.unread_filter_enabled;
    let show_unreads_category = snapshot.preferences.show_unreads_category;

    let unread_channels_ordered = if unread_filter_enabled || show_unreads_category {
        unread_channels(snapshot, &unread_ids)
    } else {
        Vec::new()
    };

    let category_channels = if unread_filter_enabled {
        Vec::new()
    } else {
        channels_in_category_order(snapshot, &unread_ids)
    };

    merge_displayed_channels(
        unread_filter_enabled,
        unread_channels_ordered,
        show_unreads_category,
        category_channels,
    )
}
