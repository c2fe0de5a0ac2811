auto_derived!(
    /// Number of messages posted in a channel
    pub struct ChannelMessageCount {
        /// Number of messages in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub total: i64,
        /// Number of root messages in this channel
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_zero_i64", default)
        )]
        pub root: i64,
    }
);

impl ChannelMessageCount {
    /// Effective message total
    ///
    /// Thread replies are excluded while collapsed threads are enabled.
    pub fn visible(&self, collapsed_threads: bool) -> i64 {
        if collapsed_threads {
            self.root
        } else {
            self.total
        }
    }
}
