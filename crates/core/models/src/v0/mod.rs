mod categories;
mod channel_memberships;
mod channels;
mod message_counts;
mod user_settings;

pub use categories::*;
pub use channel_memberships::*;
pub use channels::*;
pub use message_counts::*;
pub use user_settings::*;
