auto_derived!(
    /// Channel
    pub struct Channel {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,

        /// Display name of the channel
        pub display_name: String,

        /// Time at which this channel was created
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub create_at: i64,
        /// Time at which this channel was archived, zero while it is active
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub delete_at: i64,

        /// Time of the most recent message in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub last_post_at: i64,
        /// Time of the most recent root message in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub last_root_post_at: i64,
    }
);

impl Channel {
    /// Whether this channel has been archived
    pub fn is_archived(&self) -> bool {
        self.delete_at > 0
    }

    /// Timestamp of the last activity relevant to sorting
    ///
    /// Counts root messages only while collapsed threads are enabled, and
    /// falls back to the creation time for channels without any posts.
    pub fn last_activity_at(&self, collapsed_threads: bool) -> i64 {
        let last_post_at = if collapsed_threads {
            self.last_root_post_at
        } else {
            self.last_post_at
        };

        last_post_at.max(self.create_at)
    }
}

#[cfg(test)]
mod tests {
    use super::Channel;

    #[test]
    fn last_activity_falls_back_to_creation_time() {
        let channel = Channel {
            id: "channel".to_string(),
            display_name: "Channel".to_string(),
            create_at: 1500,
            delete_at: 0,
            last_post_at: 1000,
            last_root_post_at: 500,
        };

        assert_eq!(channel.last_activity_at(false), 1500);
        assert_eq!(channel.last_activity_at(true), 1500);

        let channel = Channel {
            last_post_at: 3000,
            last_root_post_at: 2000,
            ..channel
        };

        assert_eq!(channel.last_activity_at(false), 3000);
        assert_eq!(channel.last_activity_at(true), 2000);
    }
}
