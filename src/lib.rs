pub mod config;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod i18n;
pub mod model;
pub mod pipeline;
pub mod present;
pub mod render;

pub use config::ViewConfig;
pub use error::Error;
pub use fetch::{Fetcher, HttpFetcher};
pub use i18n::Dictionary;
pub use model::{EnrichedRecord, LookupTable, ObservationTable};
pub use pipeline::TreeMap;
pub use present::RenderConfig;
pub use render::{JsonRenderer, Renderer};
