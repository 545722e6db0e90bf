//! Editor view components

pub mod button;
pub mod button_preview;
pub mod code_output;
pub mod color_field;
pub mod color_presets;
pub mod control_panel;
pub mod editor;
pub mod icon_picker;
pub mod icons;
pub mod preset_manager;
pub mod segmented_control;
pub mod slider_control;
pub mod text_input;
pub mod website_preview;

mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use button_preview::{ButtonPreview, PreviewButton};
pub use code_output::CodeOutput;
pub use color_field::ColorField;
pub use color_presets::ColorPresets;
pub use control_panel::ControlPanel;
pub use editor::EditorView;
pub use icon_picker::IconPicker;
pub use preset_manager::PresetManager;
pub use segmented_control::{Segment, SegmentedControl};
pub use slider_control::SliderControl;
pub use text_input::{TextInput, TextInputSize};
pub use website_preview::WebsitePreview;
