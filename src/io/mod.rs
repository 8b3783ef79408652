pub mod discover;
pub mod excel_read;
pub mod report_write;
