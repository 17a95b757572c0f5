pub mod advisory;
pub mod run_of_show;
