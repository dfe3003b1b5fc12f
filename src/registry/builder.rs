//! Builder Preview Renderers
//!
//! Static look of each node on the editing canvas. Inputs are disabled;
//! the canvas row handles selection and dragging.

use leptos::prelude::*;

use form_schema::{FieldOption, Node, NodeType, TableColumn};

use super::{
    display_text, divider_view, heading_view, help_text_view, image_view, label_view,
    page_break_view, paragraph_view, unknown_view,
};

/// Render the canvas preview for a node
pub fn render_builder_node(node: &Node) -> AnyView {
    match node.node_type() {
        NodeType::H1 => heading_view(1, display_text(node)),
        NodeType::H2 => heading_view(2, display_text(node)),
        NodeType::H3 => heading_view(3, display_text(node)),
        NodeType::H4 => heading_view(4, display_text(node)),
        NodeType::H5 => heading_view(5, display_text(node)),
        NodeType::H6 => heading_view(6, display_text(node)),
        NodeType::Paragraph => paragraph_view(node),
        NodeType::HelpText => help_text_view(node),
        NodeType::Text => input_preview(node, "text"),
        NodeType::Textarea => textarea_preview(node),
        NodeType::Number => input_preview(node, "number"),
        NodeType::Date => input_preview(node, "date"),
        NodeType::Time => input_preview(node, "time"),
        NodeType::Datetime => input_preview(node, "datetime-local"),
        NodeType::File => input_preview(node, "file"),
        NodeType::Select => select_preview(node, false),
        NodeType::Multiselect => select_preview(node, true),
        NodeType::Radio => choice_preview(node, "radio"),
        NodeType::Checkbox => choice_preview(node, "checkbox"),
        NodeType::Table => table_preview(node),
        NodeType::Image => image_view(node),
        NodeType::Divider => divider_view(),
        NodeType::PageBreak => page_break_view(),
        NodeType::Submit => button_preview(node, "Submit"),
        NodeType::Reset => button_preview(node, "Reset"),
        NodeType::Unknown => unknown_view(node),
    }
}

fn input_preview(node: &Node, input_type: &'static str) -> AnyView {
    let placeholder = node.props().placeholder().unwrap_or_default().to_string();
    view! {
        <div class="field-preview">
            {label_view(node)}
            <input type=input_type class="field-input" placeholder=placeholder disabled=true />
        </div>
    }
    .into_any()
}

fn textarea_preview(node: &Node) -> AnyView {
    let placeholder = node.props().placeholder().unwrap_or_default().to_string();
    view! {
        <div class="field-preview">
            {label_view(node)}
            <textarea class="field-input" placeholder=placeholder rows=3 disabled=true></textarea>
        </div>
    }
    .into_any()
}

fn select_preview(node: &Node, multiple: bool) -> AnyView {
    let options = node.props().options();
    view! {
        <div class="field-preview">
            {label_view(node)}
            <select class="field-input" multiple=multiple disabled=true>
                {options
                    .into_iter()
                    .map(|FieldOption { value, label }| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
        </div>
    }
    .into_any()
}

fn choice_preview(node: &Node, input_type: &'static str) -> AnyView {
    let options = node.props().options();
    view! {
        <div class="field-preview">
            {label_view(node)}
            <div class="choice-group">
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <label class="choice-option">
                                <input type=input_type value=option.value disabled=true />
                                <span>{option.label}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

fn table_preview(node: &Node) -> AnyView {
    let columns = node.props().columns();
    let cells = columns.len();
    view! {
        <div class="field-preview">
            {label_view(node)}
            <table class="field-table">
                <thead>
                    <tr>
                        {columns
                            .into_iter()
                            .map(|TableColumn { label, .. }| view! { <th>{label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        {(0..cells)
                            .map(|_| view! { <td><input type="text" class="field-input" disabled=true /></td> })
                            .collect_view()}
                    </tr>
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

fn button_preview(node: &Node, fallback: &'static str) -> AnyView {
    let label = node
        .props()
        .label()
        .filter(|l| !l.is_empty())
        .unwrap_or(fallback)
        .to_string();
    let class = match node.node_type() {
        NodeType::Reset => "form-button secondary",
        _ => "form-button primary",
    };
    view! { <button type="button" class=class disabled=true>{label}</button> }.into_any()
}

