//! Backend Schema Adapter
//!
//! Translates between the builder's node list and the backend's flat,
//! order-indexed component list. The backend vocabulary is narrower than
//! `NodeType`, so loading goes through the heuristics in [`infer`].

mod component;
mod deserialize;
pub mod infer;
mod serialize;
pub mod wire;

pub use component::BackendComponent;
pub use deserialize::{from_backend_component, from_backend_components};
pub use infer::infer_node_type;
pub use serialize::{backend_token, to_backend_component, to_backend_components};
