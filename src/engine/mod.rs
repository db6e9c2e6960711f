mod browsers;
mod clients;
mod countries;
mod daily;
mod engagement;
mod engines;
mod environments;
mod executor;
mod falloff;
mod summary;
mod value;

pub use executor::{execute, ViewKind};
pub use value::{Bucket, DailyPoint, FalloffPoint, GeoBucket, Metric, MetricValue, View};
