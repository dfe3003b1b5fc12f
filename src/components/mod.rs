//! UI Components
//!
//! Leptos components for the builder, preview and respondent views.

mod delete_confirm_button;
mod toast_host;
mod palette_panel;
mod canvas_node;
mod builder_canvas;
mod properties_panel;
mod title_bar;
mod form_fill;
mod builder_page;
mod respond_page;
mod form_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use toast_host::ToastHost;
pub use palette_panel::PalettePanel;
pub use canvas_node::CanvasNode;
pub use builder_canvas::BuilderCanvas;
pub use properties_panel::PropertiesPanel;
pub use title_bar::TitleBar;
pub use form_fill::FormFill;
pub use builder_page::BuilderPage;
pub use respond_page::RespondPage;
pub use form_list::FormList;
