pub mod diff_viewer;
pub mod output_format;
pub mod theme;
