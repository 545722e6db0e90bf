mod editor;

pub use editor::Editor;
