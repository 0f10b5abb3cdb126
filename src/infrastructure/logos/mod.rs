mod logo_files;

pub use logo_files::*;
