//! Client-side listing engine: filter, then sort, then paginate.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod view;

pub use filter::filter;
pub use paginate::{paginate, PageSlice};
pub use sort::sort;
pub use state::{
    Filters, PriceRange, SortKey, SortOrder, ViewIntent, ViewState, DEFAULT_PAGE_SIZE,
};
pub use view::{compute_view, ListingEngine, ViewResult};
