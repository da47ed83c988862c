mod config_file;
mod field_isolation;
