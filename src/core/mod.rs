pub mod pipeline;

pub use crate::domain::model::{
    Coordinates, EstimationRequest, EstimationResponse, PostalAddress, YieldEstimate,
};
pub use crate::domain::ports::{AddressResolver, Geocoder, YieldEstimator};
pub use crate::utils::error::Result;
