auto_derived!(
    /// Sorting applied to the channels within a category
    #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
    pub enum CategorySorting {
        /// Order chosen by the client for this category type
        Default,
        /// Order in which the user arranged the channels
        Manual,
        /// Alphabetical by display name
        Alphabetical,
        /// Most recent activity first
        Recency,
    }

    /// Category of channels in one team's sidebar
    pub struct Category {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the team this category belongs to
        pub team_id: String,

        /// Name displayed in the sidebar
        pub display_name: String,
        /// Ids of the channels in this category, in the user's order
        #[cfg_attr(feature = "serde", serde(default))]
        pub channel_ids: Vec<String>,

        /// Sorting applied to the channels in this category
        #[cfg_attr(feature = "serde", serde(default))]
        pub sorting: CategorySorting,
        /// Whether this category is collapsed in the sidebar
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "crate::if_false", default)
        )]
        pub collapsed: bool,
    }
);

impl Default for CategorySorting {
    fn default() -> CategorySorting {
        CategorySorting::Default
    }
}
