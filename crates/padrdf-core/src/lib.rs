//! The decision core of padrdf: content negotiation, format resolution and
//! dialect sniffing.
//!
//! Everything in this crate is a pure function over request data or document
//! text: no I/O, no shared state. The application crate owns fetching,
//! parsing and rendering; this crate only decides *what* should happen:
//!
//! - [`negotiation`] parses `Accept` headers into the client's single
//!   preferred media type,
//! - [`format`] is the fixed table binding each output serialization to its
//!   canonical MIME type and URI suffix,
//! - [`resolver`] maps one request to exactly one [`resolver::Outcome`],
//! - [`detect`] classifies unlabeled RDF text into a parse dialect from a
//!   bounded sample, without running a full parser.

pub mod detect;
pub mod format;
pub mod negotiation;
pub mod resolver;

pub use detect::{DocumentDialect, guess_dialect};
pub use format::OutputFormat;
pub use negotiation::{AcceptHeader, MediaTypePreference};
pub use resolver::{Outcome, resolve, resolve_pad_submission};
