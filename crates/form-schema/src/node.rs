//! Node Model
//!
//! A node is one form element: a type tag, free-form props and a stable id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::props::Props;

/// Opaque node identifier, unique within a document and never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Node type tag
///
/// `Unknown` catches tags from builder JSON this build does not recognize,
/// so a stale draft still loads and renders a visible warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    HelpText,
    Text,
    Textarea,
    Number,
    Date,
    Time,
    Datetime,
    File,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    Table,
    Image,
    Divider,
    PageBreak,
    Submit,
    Reset,
    #[serde(other)]
    Unknown,
}

/// Coarse classification of node types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Heading,
    /// Static text (paragraph, help text)
    Display,
    /// Free-form value input
    Input,
    /// Value picked from `options`
    Choice,
    Table,
    /// Image, divider, page break
    Media,
    Button,
    Unknown,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::H1 => "h1",
            NodeType::H2 => "h2",
            NodeType::H3 => "h3",
            NodeType::H4 => "h4",
            NodeType::H5 => "h5",
            NodeType::H6 => "h6",
            NodeType::Paragraph => "paragraph",
            NodeType::HelpText => "help-text",
            NodeType::Text => "text",
            NodeType::Textarea => "textarea",
            NodeType::Number => "number",
            NodeType::Date => "date",
            NodeType::Time => "time",
            NodeType::Datetime => "datetime",
            NodeType::File => "file",
            NodeType::Select => "select",
            NodeType::Multiselect => "multiselect",
            NodeType::Radio => "radio",
            NodeType::Checkbox => "checkbox",
            NodeType::Table => "table",
            NodeType::Image => "image",
            NodeType::Divider => "divider",
            NodeType::PageBreak => "page-break",
            NodeType::Submit => "submit",
            NodeType::Reset => "reset",
            NodeType::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "h1" => NodeType::H1,
            "h2" => NodeType::H2,
            "h3" => NodeType::H3,
            "h4" => NodeType::H4,
            "h5" => NodeType::H5,
            "h6" => NodeType::H6,
            "paragraph" => NodeType::Paragraph,
            "help-text" => NodeType::HelpText,
            "text" => NodeType::Text,
            "textarea" => NodeType::Textarea,
            "number" => NodeType::Number,
            "date" => NodeType::Date,
            "time" => NodeType::Time,
            "datetime" => NodeType::Datetime,
            "file" => NodeType::File,
            "select" => NodeType::Select,
            "multiselect" => NodeType::Multiselect,
            "radio" => NodeType::Radio,
            "checkbox" => NodeType::Checkbox,
            "table" => NodeType::Table,
            "image" => NodeType::Image,
            "divider" => NodeType::Divider,
            "page-break" => NodeType::PageBreak,
            "submit" => NodeType::Submit,
            "reset" => NodeType::Reset,
            _ => NodeType::Unknown,
        }
    }

    /// Heading type for a level, clamped to 1..=6
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => NodeType::H1,
            2 => NodeType::H2,
            3 => NodeType::H3,
            4 => NodeType::H4,
            5 => NodeType::H5,
            _ => NodeType::H6,
        }
    }

    /// Heading level, `None` for non-heading types
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NodeType::H1 => Some(1),
            NodeType::H2 => Some(2),
            NodeType::H3 => Some(3),
            NodeType::H4 => Some(4),
            NodeType::H5 => Some(5),
            NodeType::H6 => Some(6),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            NodeType::H1
            | NodeType::H2
            | NodeType::H3
            | NodeType::H4
            | NodeType::H5
            | NodeType::H6 => FieldKind::Heading,
            NodeType::Paragraph | NodeType::HelpText => FieldKind::Display,
            NodeType::Text
            | NodeType::Textarea
            | NodeType::Number
            | NodeType::Date
            | NodeType::Time
            | NodeType::Datetime
            | NodeType::File => FieldKind::Input,
            NodeType::Select | NodeType::Multiselect | NodeType::Radio | NodeType::Checkbox => {
                FieldKind::Choice
            }
            NodeType::Table => FieldKind::Table,
            NodeType::Image | NodeType::Divider | NodeType::PageBreak => FieldKind::Media,
            NodeType::Submit | NodeType::Reset => FieldKind::Button,
            NodeType::Unknown => FieldKind::Unknown,
        }
    }

    /// Whether respondents provide a value for this type
    pub fn accepts_answer(&self) -> bool {
        matches!(
            self.kind(),
            FieldKind::Input | FieldKind::Choice | FieldKind::Table
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One form element
///
/// `id` and `node_type` are fixed at creation; changing the type means
/// deleting the node and creating a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(default)]
    pub(crate) props: Props,
}

impl Node {
    pub fn new(node_type: NodeType, props: Props) -> Self {
        Self {
            id: NodeId::new(),
            node_type,
            props,
        }
    }

    /// Build a node with a caller-chosen id (fixtures, restored drafts)
    pub fn with_id(id: impl Into<NodeId>, node_type: NodeType, props: Props) -> Self {
        Self {
            id: id.into(),
            node_type,
            props,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Copy with a freshly generated id
    ///
    /// The copy is a new field: the backend row identity (`componentId`,
    /// `name`) stays with the source.
    pub(crate) fn duplicate(&self) -> Self {
        let mut props = self.props.clone();
        props.remove(crate::props::COMPONENT_ID);
        props.remove(crate::props::NAME);
        Self {
            id: NodeId::new(),
            node_type: self.node_type,
            props,
        }
    }
}
