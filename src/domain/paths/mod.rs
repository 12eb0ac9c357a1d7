pub mod csv_file_path;
pub mod output_directory;
pub mod path_error;
