pub mod ide_helper;
