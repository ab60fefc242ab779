//! Domain input models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod input;
pub mod listing;
pub mod pagination;
pub mod validation;

pub use input::{parse_id, required, IncVotes, NewCategory, NewComment, NewReview};
pub use listing::{ReviewListParams, ReviewListQuery, ReviewSortColumn, SortOrder};
pub use pagination::{Pagination, PaginationParams};
pub use validation::ValidationError;
