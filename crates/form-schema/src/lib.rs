//! Form Schema
//!
//! The builder's document model: nodes, the mutation engine, the palette,
//! respondent answers and the adapter to the backend's component format.
//! Nothing here touches the DOM, so it is tested on the host target.

mod error;
mod node;
pub mod props;
mod document;
mod palette;
pub mod answers;
pub mod backend;

pub use error::{SchemaError, SchemaResult};
pub use node::{FieldKind, Node, NodeId, NodeType};
pub use props::{FieldOption, Props, TableColumn};
pub use document::{Document, SchemaAction};
pub use palette::{display_name, PaletteCategory, PaletteEntry, PALETTE};
