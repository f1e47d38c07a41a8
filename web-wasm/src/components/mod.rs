pub mod header;
pub mod category_select;
pub mod file_picker;
pub mod progress_indicator;
pub mod upload_panel;
pub mod result_panel;
pub mod disease_details;
pub mod error_notice;
pub mod upload_predictor;
