pub mod error;
pub mod logging;

pub mod features;
pub mod ingest;
pub mod model;
pub mod session;

pub use error::Result;
pub use session::ExplorerSession;
