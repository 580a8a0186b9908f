//! figtk-io: getting design documents in and generated programs out.
//!
//! # Providers
//!
//! | Provider | Source |
//! |----------|--------|
//! | [`FigmaClient`] | Figma REST API (`GET /v1/files/{id}`) |
//! | [`JsonFileProvider`] | Saved file responses on disk, one `{id}.json` per document |
//!
//! # Example
//!
//! ```ignore
//! use figtk_io::{DocumentProvider, FigmaClient, ClientOptions, FsSink, PersistenceSink};
//!
//! let client = FigmaClient::new(ClientOptions::default())?;
//! let document = client.fetch(&token, "AbC123")?;
//!
//! let written = FsSink::default().save("login".as_ref(), &source)?;
//! ```

pub mod figma;
pub mod file;
pub mod provider;
pub mod sink;

pub use figma::{ClientOptions, FigmaClient};
pub use file::{read_document, JsonFileProvider};
pub use provider::DocumentProvider;
pub use sink::{FsSink, PersistenceSink};
