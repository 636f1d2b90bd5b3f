mod graph_view;
mod operation_card;
mod toast;
mod train_list;

pub use graph_view::FleetGraphCanvas;
pub use operation_card::{OperationCard, OperationRequest, OPERATIONS};
pub use toast::{provide_toaster, use_toaster, ToastHost, ToastKind, Toaster};
pub use train_list::TrainList;
