pub mod decode;
pub mod error;
pub mod generated;
pub mod load;
pub mod remote;
pub mod traits;
pub mod types;

pub use decode::decode_records;
pub use error::SourceError;
pub use generated::GeneratedSource;
pub use load::{load, LoadState, Snapshot};
pub use remote::RemoteSource;
pub use traits::DataSource;
pub use types::{GeneratorParams, RemoteParams, SourceKind};

/// Build the configured source behind the common trait
pub fn build(kind: &SourceKind) -> Result<Box<dyn DataSource>, SourceError> {
    Ok(match kind {
        SourceKind::Remote(params) => Box::new(RemoteSource::with_params(params.clone())?),
        SourceKind::Mock(params) => Box::new(GeneratedSource::with_params(*params)),
    })
}
