pub mod file_writer;

pub use file_writer::FileReportWriter;
