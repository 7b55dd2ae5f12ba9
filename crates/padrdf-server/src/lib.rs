//! HTTP serving for padrdf: the hyper connection loop behind a [`Handler`]
//! trait, plus the static-file service for the reserved asset prefix.

pub mod http;
pub mod static_files;

pub use http::{Handler, HttpServer};
pub use static_files::StaticFiles;
