mod holes;
mod islands;
mod overlap;

pub use holes::FindHoles;
pub use islands::FindIslands;
pub use overlap::regions_overlap;
