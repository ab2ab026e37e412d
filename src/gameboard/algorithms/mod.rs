mod depth_first_search;
mod eller;
mod row_sets;

pub use depth_first_search::DepthFirstSearch;
pub use eller::Eller;
pub use row_sets::RowSets;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;
