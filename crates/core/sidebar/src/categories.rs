use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::iter::Peekable;
use std::str::Chars;
use std::sync::Arc;

use banter_models::v0::{Category, CategorySorting, Channel, ChannelMembership};

use crate::SidebarSnapshot;

fn take_digits(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            run.push(*c);
            chars.next();
        } else {
            break;
        }
    }

    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    // longer runs hold larger values once leading zeroes are gone
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural-order comparison of display names
///
/// Case-insensitive; digit runs compare by value, so "Channel 9" sorts ahead
/// of "Channel 10".
fn compare_display_names(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let a_run = take_digits(&mut a_chars);
                    let b_run = take_digits(&mut b_chars);

                    match compare_digit_runs(&a_run, &b_run) {
                        Ordering::Equal => {}
                        ordering => return ordering,
                    }
                } else {
                    match x.to_lowercase().cmp(y.to_lowercase()) {
                        Ordering::Equal => {
                            a_chars.next();
                            b_chars.next();
                        }
                        ordering => return ordering,
                    }
                }
            }
        }
    }
}

/// Sort channels by display name, muted channels last
pub fn sort_channels_by_name(
    mut channels: Vec<Channel>,
    memberships: &HashMap<String, ChannelMembership>,
) -> Vec<Channel> {
    let is_muted = |channel: &Channel| {
        memberships
            .get(&channel.id)
            .map(|membership| membership.is_muted())
            .unwrap_or(false)
    };

    channels.sort_by(|a, b| {
        match (is_muted(a), is_muted(b)) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }

        compare_display_names(&a.display_name, &b.display_name).then_with(|| a.id.cmp(&b.id))
    });

    channels
}

/// Sort channels by most recent activity
pub fn sort_channels_by_recency(
    mut channels: Vec<Channel>,
    collapsed_threads: bool,
) -> Vec<Channel> {
    channels.sort_by(|a, b| {
        b.last_activity_at(collapsed_threads)
            .cmp(&a.last_activity_at(collapsed_threads))
            .then_with(|| a.id.cmp(&b.id))
    });

    channels
}

/// Channel ids of a category in the category's configured order
///
/// Manual and default sorting preserve the stored order. Ids that do not
/// resolve to a cached channel are skipped.
pub fn channel_ids_for_category(category: &Category, snapshot: &SidebarSnapshot) -> Vec<String> {
    let channels = category
        .channel_ids
        .iter()
        .filter_map(|id| snapshot.channels.get(id))
        .cloned()
        .collect::<Vec<_>>();

    let channels = match category.sorting {
        CategorySorting::Alphabetical => sort_channels_by_name(channels, &snapshot.memberships),
        CategorySorting::Recency => {
            sort_channels_by_recency(channels, snapshot.preferences.collapsed_threads_enabled)
        }
        CategorySorting::Default | CategorySorting::Manual => channels,
    };

    channels.into_iter().map(|channel| channel.id).collect()
}

/// Concatenate each category's surviving channels in category order
///
/// While the unreads category is shown, unread channels are dropped from
/// their home category. Collapsed categories only surface unread channels
/// and the current channel. Archived channels are dropped unless current.
pub fn channels_in_category_order(
    snapshot: &SidebarSnapshot,
    unread_ids: &HashSet<String>,
) -> Vec<Channel> {
    let show_unreads_category = snapshot.preferences.show_unreads_category;
    let mut displayed = Vec::new();

    for category in snapshot.categories.iter() {
        for id in channel_ids_for_category(category, snapshot) {
            if show_unreads_category && unread_ids.contains(&id) {
                continue;
            }

            if category.collapsed
                && !unread_ids.contains(&id)
                && id != snapshot.current_channel_id
            {
                continue;
            }

            let channel = match snapshot.channels.get(&id) {
                Some(channel) => channel,
                None => continue,
            };

            if channel.is_archived() && id != snapshot.current_channel_id {
                continue;
            }

            displayed.push(channel.clone());
        }
    }

    displayed
}

/// Category channel ids with the channels folded into the unreads bucket
/// removed
///
/// Returns the input allocation untouched when nothing was removed, so
/// downstream consumers can skip work with `Arc::ptr_eq`.
pub fn filtered_channel_ids_for_category(
    channel_ids: &Arc<Vec<String>>,
    unread_ids: &HashSet<String>,
    show_unreads_category: bool,
) -> Arc<Vec<String>> {
    if !show_unreads_category {
        return Arc::clone(channel_ids);
    }

    let filtered = channel_ids
        .iter()
        .filter(|id| !unread_ids.contains(*id))
        .cloned()
        .collect::<Vec<_>>();

    if filtered.len() == channel_ids.len() {
        return Arc::clone(channel_ids);
    }

    Arc::new(filtered)
}
