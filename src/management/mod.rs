mod release;
mod store;

pub use release::DEFAULT_PLAYLIST_NAME;
pub use release::check_new_releases;
pub use release::is_within_window;
pub use release::parse_release_date;
pub use store::NoopStore;
pub use store::Store;
