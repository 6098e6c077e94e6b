pub mod output_path;
