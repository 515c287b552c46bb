#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The constraint graph has a cycle of positive total length, so no coordinate assignment
    /// can satisfy it. This points at a bug in whatever built the constraint graph.
    #[error("constraint graph has a positive-length cycle through node {node}")]
    PositiveCycle { node: String },
    #[error("layout failed: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, Error>;
