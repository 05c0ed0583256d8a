pub mod explorer_config;
pub mod frame_data;
pub mod run_summary;
