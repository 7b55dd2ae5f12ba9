//! padrdf, a content-negotiating proxy serving etherpad contents as RDF.
//!
//! The proxy fetches a pad's plain-text export, reads it as Turtle, and
//! answers with the serialization the client asked for: an HTML triple
//! table, Turtle, RDF/XML, N-Triples or N3. Requests without an explicit
//! format suffix are redirected (303) to the suffixed URL matching their
//! Accept header. The decision logic lives in `padrdf-core`; this crate
//! wires it to the fetcher, the RDF engine and the page renderer.

pub mod error;
pub mod fetch;
pub mod handler;
pub mod pages;
pub mod rdf;
pub mod settings;

pub use error::PadError;
pub use fetch::{ContentFetcher, FetchedDocument, PadFetcher};
pub use handler::PadProxy;
pub use settings::Settings;
