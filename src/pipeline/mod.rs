pub mod anchors;
pub mod assemble;
pub mod kmeans;
pub mod load;
