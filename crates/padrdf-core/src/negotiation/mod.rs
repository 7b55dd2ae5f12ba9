//! Accept header negotiation.

pub mod accept;
pub mod media_type;

pub use accept::AcceptHeader;
pub use media_type::MediaTypePreference;
