pub mod curves;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod scenario;
pub mod web;

pub use curves::{curve_set, CurveSeries};
pub use engine::{Assessment, RiskEngine, RiskPolicy, SiteInput, Status, StatusScheme};
pub use error::EngineError;
pub use model::ModelConstants;
pub use scenario::ClimateScenario;
