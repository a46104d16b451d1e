pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod facts;
pub mod index;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod tracing;
pub mod types;

pub use config::Config;
pub use emit::OutputFormat;
pub use error::{BuildError, RegistryError};
pub use facts::load_facts;
pub use index::{ImplementorIndex, IndexBuilder};
pub use registry::{Delivery, Registry};
pub use render::{DescriptionStyle, RenderOptions};
pub use types::{FactField, ImplementedType, ImplementorFact};
