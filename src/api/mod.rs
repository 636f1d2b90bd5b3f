//! REST clients for the train controller: topology fetch and control commands.

mod command;
mod error;
mod topology;
mod types;

pub use command::CommandClient;
pub use error::ApiError;
pub use topology::TopologyClient;
pub use types::{CommandEnvelope, CommandResponse, RawTopologyResponse, RawTrainRecord};
