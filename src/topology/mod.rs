//! Fleet topology: graph data model and the raw-response transformer.

mod model;
mod transform;

pub use model::{FleetLink, FleetNode, GraphModel, TrainListEntry};
pub use transform::transform;
