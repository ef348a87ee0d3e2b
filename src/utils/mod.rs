pub mod result_ext;
pub mod time;
