use thiserror::Error;

use crate::model::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node id {0} does not exist in the network")]
    InvalidNode(NodeId),
    #[error("Weights must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    #[error("A tour needs at least two stops, got {0}")]
    TourTooSmall(usize),
    #[error("Tour of {got} stops exceeds the limit of {limit}")]
    TourTooLarge { got: usize, limit: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
