//! Project discovery and selection
//!
//! - `ProjectReference` - a `.csproj` file and the directory it lives in
//! - `ProjectDiscovery` - where candidates come from (workspace walk or a fixed list)
//! - `ProjectResolver` - narrows candidates to the one an action runs against

mod discovery;
mod resolver;
mod types;

pub use discovery::*;
pub use resolver::*;
pub use types::*;
