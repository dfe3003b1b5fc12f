//! Palette
//!
//! Insertable node types and the props a fresh node starts with.

use serde_json::json;

use crate::node::{Node, NodeType};
use crate::props::{self, FieldOption, Props, TableColumn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCategory {
    Typography,
    Inputs,
    Choices,
    Layout,
    Actions,
}

impl PaletteCategory {
    pub fn title(&self) -> &'static str {
        match self {
            PaletteCategory::Typography => "Typography",
            PaletteCategory::Inputs => "Inputs",
            PaletteCategory::Choices => "Choices",
            PaletteCategory::Layout => "Layout",
            PaletteCategory::Actions => "Actions",
        }
    }

    pub const ALL: [PaletteCategory; 5] = [
        PaletteCategory::Typography,
        PaletteCategory::Inputs,
        PaletteCategory::Choices,
        PaletteCategory::Layout,
        PaletteCategory::Actions,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub node_type: NodeType,
    pub label: &'static str,
    pub category: PaletteCategory,
}

const fn entry(node_type: NodeType, label: &'static str, category: PaletteCategory) -> PaletteEntry {
    PaletteEntry {
        node_type,
        label,
        category,
    }
}

/// Node types offered in the builder palette
pub const PALETTE: &[PaletteEntry] = &[
    entry(NodeType::H1, "Heading 1", PaletteCategory::Typography),
    entry(NodeType::H2, "Heading 2", PaletteCategory::Typography),
    entry(NodeType::H3, "Heading 3", PaletteCategory::Typography),
    entry(NodeType::Paragraph, "Paragraph", PaletteCategory::Typography),
    entry(NodeType::HelpText, "Help Text", PaletteCategory::Typography),
    entry(NodeType::Text, "Text Input", PaletteCategory::Inputs),
    entry(NodeType::Textarea, "Text Area", PaletteCategory::Inputs),
    entry(NodeType::Number, "Number", PaletteCategory::Inputs),
    entry(NodeType::Date, "Date", PaletteCategory::Inputs),
    entry(NodeType::Time, "Time", PaletteCategory::Inputs),
    entry(NodeType::Datetime, "Date & Time", PaletteCategory::Inputs),
    entry(NodeType::File, "File Upload", PaletteCategory::Inputs),
    entry(NodeType::Select, "Dropdown", PaletteCategory::Choices),
    entry(NodeType::Multiselect, "Multi Select", PaletteCategory::Choices),
    entry(NodeType::Radio, "Radio Group", PaletteCategory::Choices),
    entry(NodeType::Checkbox, "Checkboxes", PaletteCategory::Choices),
    entry(NodeType::Table, "Table", PaletteCategory::Inputs),
    entry(NodeType::Image, "Image", PaletteCategory::Layout),
    entry(NodeType::Divider, "Divider", PaletteCategory::Layout),
    entry(NodeType::PageBreak, "Page Break", PaletteCategory::Layout),
    entry(NodeType::Submit, "Submit Button", PaletteCategory::Actions),
    entry(NodeType::Reset, "Reset Button", PaletteCategory::Actions),
];

/// Palette label for a type, falling back to its tag
pub fn display_name(node_type: NodeType) -> &'static str {
    PALETTE
        .iter()
        .find(|e| e.node_type == node_type)
        .map(|e| e.label)
        .unwrap_or_else(|| node_type.as_str())
}

fn default_props(node_type: NodeType) -> Props {
    match node_type {
        NodeType::H1 | NodeType::H2 | NodeType::H3 | NodeType::H4 | NodeType::H5 | NodeType::H6 => {
            Props::new().with(props::TEXT, "Heading")
        }
        NodeType::Paragraph => Props::new().with(props::TEXT, "Paragraph text"),
        NodeType::HelpText => Props::new().with(props::TEXT, "Helpful hint for respondents"),
        NodeType::Text => input_props("Text Field", "Enter text"),
        NodeType::Textarea => input_props("Long Answer", "Type your answer"),
        NodeType::Number => input_props("Number", "0"),
        NodeType::Date => input_props("Date", ""),
        NodeType::Time => input_props("Time", ""),
        NodeType::Datetime => input_props("Date & Time", ""),
        NodeType::File => input_props("Upload File", ""),
        NodeType::Select | NodeType::Multiselect | NodeType::Radio | NodeType::Checkbox => {
            let mut p = Props::new()
                .with(props::LABEL, display_name(node_type))
                .with(props::REQUIRED, false);
            p.set_options(&[
                FieldOption::new("option_1", "Option 1"),
                FieldOption::new("option_2", "Option 2"),
            ]);
            p
        }
        NodeType::Table => {
            let mut p = Props::new()
                .with(props::LABEL, "Table")
                .with(props::REQUIRED, false);
            p.set_columns(&[
                TableColumn::new("column_1", "Column 1"),
                TableColumn::new("column_2", "Column 2"),
            ]);
            p
        }
        NodeType::Image => Props::new()
            .with(props::SRC, "")
            .with(props::ALT, "Image"),
        NodeType::Divider | NodeType::PageBreak => Props::new(),
        NodeType::Submit => Props::new().with(props::LABEL, "Submit"),
        NodeType::Reset => Props::new().with(props::LABEL, "Reset"),
        NodeType::Unknown => Props::new(),
    }
}

fn input_props(label: &str, placeholder: &str) -> Props {
    Props::new()
        .with(props::LABEL, label)
        .with(props::PLACEHOLDER, placeholder)
        .with(props::REQUIRED, false)
        .with(props::VISIBLE_IN_PREVIEW, json!(true))
}

impl Node {
    /// Fresh node of `node_type` with palette defaults
    pub fn with_defaults(node_type: NodeType) -> Self {
        Node::new(node_type, default_props(node_type))
    }
}
