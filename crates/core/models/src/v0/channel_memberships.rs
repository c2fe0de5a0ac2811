auto_derived!(
    /// Notification level for ordinary messages in a channel
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum MarkUnread {
        /// Every message marks the channel unread
        All,
        /// Only mentions mark the channel unread
        Mention,
    }

    /// Composite primary key consisting of channel and user id
    #[derive(Hash)]
    pub struct ChannelCompositeKey {
        /// Channel Id
        pub channel: String,
        /// User Id
        pub user: String,
    }

    /// A user's view of a channel
    pub struct ChannelMembership {
        /// Composite key pointing to a user's view of a channel
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: ChannelCompositeKey,

        /// Notification preference for ordinary messages
        ///
        /// A channel marked unread on mention only is considered muted.
        #[cfg_attr(feature = "serde", serde(default))]
        pub mark_unread: MarkUnread,

        /// Number of messages mentioning the user
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub mention_count: i64,
        /// Number of root messages mentioning the user
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub mention_count_root: i64,

        /// Number of messages the user has read in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub msg_count: i64,
        /// Number of root messages the user has read in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub msg_count_root: i64,
    }
);

impl Default for MarkUnread {
    fn default() -> MarkUnread {
        MarkUnread::All
    }
}

impl ChannelMembership {
    /// Whether the user has muted ordinary messages in this channel
    pub fn is_muted(&self) -> bool {
        matches!(self.mark_unread, MarkUnread::Mention)
    }

    /// Effective number of mentions
    pub fn mentions(&self, collapsed_threads: bool) -> i64 {
        if collapsed_threads {
            self.mention_count_root
        } else {
            self.mention_count
        }
    }

    /// Number of messages the user has read in this channel
    pub fn read_messages(&self, collapsed_threads: bool) -> i64 {
        if collapsed_threads {
            self.msg_count_root
        } else {
            self.msg_count
        }
    }
}
