pub mod source_manager;
