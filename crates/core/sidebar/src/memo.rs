use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use banter_models::v0::{
    Category, Channel, ChannelMembership, ChannelMessageCount, LastUnreadChannel,
    SidebarPreferences,
};

use crate::SidebarSnapshot;

/// Last-value cache for a derived selector
///
/// Holds the previous key/value pair and recomputes only when the key
/// changes.
pub struct Memoized<K, V> {
    cached: Option<(K, V)>,
}

impl<K: PartialEq, V: Clone> Memoized<K, V> {
    pub fn new() -> Memoized<K, V> {
        Memoized { cached: None }
    }

    /// Return the cached value if `key` matches the previous invocation,
    /// otherwise compute and cache a fresh one
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        match &self.cached {
            Some((cached_key, value)) if *cached_key == key => value.clone(),
            _ => {
                let value = compute();
                self.cached = Some((key, value.clone()));
                value
            }
        }
    }
}

impl<K: PartialEq, V: Clone> Default for Memoized<K, V> {
    fn default() -> Memoized<K, V> {
        Memoized::new()
    }
}

/// Identity of a snapshot's inputs
///
/// Tables compare by `Arc` pointer, scalars by value.
#[derive(Clone)]
struct SnapshotKey {
    channels: Arc<HashMap<String, Channel>>,
    memberships: Arc<HashMap<String, ChannelMembership>>,
    message_counts: Arc<HashMap<String, ChannelMessageCount>>,
    categories: Arc<Vec<Category>>,
    current_channel_id: String,
    last_unread_channel: Option<LastUnreadChannel>,
    preferences: SidebarPreferences,
}

impl SnapshotKey {
    fn of(snapshot: &SidebarSnapshot) -> SnapshotKey {
        SnapshotKey {
            channels: Arc::clone(&snapshot.channels),
            memberships: Arc::clone(&snapshot.memberships),
            message_counts: Arc::clone(&snapshot.message_counts),
            categories: Arc::clone(&snapshot.categories),
            current_channel_id: snapshot.current_channel_id.clone(),
            last_unread_channel: snapshot.last_unread_channel.clone(),
            preferences: snapshot.preferences.clone(),
        }
    }
}

impl PartialEq for SnapshotKey {
    fn eq(&self, other: &SnapshotKey) -> bool {
        Arc::ptr_eq(&self.channels, &other.channels)
            && Arc::ptr_eq(&self.memberships, &other.memberships)
            && Arc::ptr_eq(&self.message_counts, &other.message_counts)
            && Arc::ptr_eq(&self.categories, &other.categories)
            && self.current_channel_id == other.current_channel_id
            && self.last_unread_channel == other.last_unread_channel
            && self.preferences == other.preferences
    }
}

/// Memoised entry points over sidebar snapshots
///
/// A snapshot whose tables are pointer-equal and whose scalars are unchanged
/// returns the identical output object; anything else recomputes.
#[derive(Default)]
pub struct SidebarSelectors {
    unread_ids: Memoized<SnapshotKey, Arc<HashSet<String>>>,
    unread_channels: Memoized<SnapshotKey, Arc<Vec<Channel>>>,
    displayed_channels: Memoized<SnapshotKey, Arc<Vec<Channel>>>,
}

impl SidebarSelectors {
    pub fn new() -> SidebarSelectors {
        SidebarSelectors::default()
    }

    /// Memoised [`unread_channel_ids`](crate::unread_channel_ids)
    pub fn unread_channel_ids(&mut self, snapshot: &SidebarSnapshot) -> Arc<HashSet<String>> {
        self.unread_ids
            .get_or_compute(SnapshotKey::of(snapshot), || {
                debug!("recomputing unread channel ids");
                Arc::new(crate::unread_channel_ids(snapshot))
            })
    }

    /// Memoised [`unread_channels`](crate::unread_channels)
    pub fn unread_channels(&mut self, snapshot: &SidebarSnapshot) -> Arc<Vec<Channel>> {
        let unread_ids = self.unread_channel_ids(snapshot);

        self.unread_channels
            .get_or_compute(SnapshotKey::of(snapshot), || {
                debug!("recomputing ordered unread channels");
                Arc::new(crate::unread_channels(snapshot, &unread_ids))
            })
    }

    /// Memoised [`displayed_channels`](crate::displayed_channels)
    pub fn displayed_channels(&mut self, snapshot: &SidebarSnapshot) -> Arc<Vec<Channel>> {
        self.displayed_channels
            .get_or_compute(SnapshotKey::of(snapshot), || {
                debug!("recomputing displayed channels");
                Arc::new(crate::displayed_channels(snapshot))
            })
    }
}
