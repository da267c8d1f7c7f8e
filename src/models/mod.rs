pub mod responses;
pub mod workload;

pub use responses::*;
pub use workload::*;
