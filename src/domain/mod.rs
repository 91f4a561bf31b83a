// Domain layer - observations, periods and chart shapes
pub mod chart;
pub mod observation;
pub mod period;
pub mod request;
pub mod source;
