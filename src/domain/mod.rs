pub mod demo;
pub mod listing;
pub mod metrics;
pub mod view;

pub use listing::{Listing, NewListing};
pub use view::{derive, SortKey};
