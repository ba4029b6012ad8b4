//! Contract models for rsdef
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ResourceDefinition`] - A named, addressable resource and everything it declares
//! - [`StateDefinition`] - A named state of a resource with its primary link relation
//! - [`StateTransition`] - A hypermedia link from a state to a related resource
//! - [`OperationDefinition`] - An HTTP method with its declared status-code outcomes
//! - [`StatusCode`] - An HTTP status code as declared (possibly out of range)
//! - [`DataTypeId`] - A reference to a data element type, resolved via [`DataTypeRegistry`]

mod data_type;
mod method;
mod operation;
mod resource;
mod state;
mod status;

pub use data_type::{DataType, DataTypeId, DataTypeRegistry};
pub use method::HttpMethod;
pub use operation::OperationDefinition;
pub use resource::{ParameterDefinition, ResourceBuilder, ResourceDefinition, ResourceKey};
pub use state::{StateDefinition, StateTransition};
pub use status::{MAX_STATUS, MIN_STATUS, StatusCode, StatusCodeOutcome};
