//! Builtin analyzers.

mod application_uid;
mod destination_rules;
mod gateways;
pub mod util;

pub use application_uid::ApplicationUidAnalyzer;
pub use destination_rules::DestinationRuleAnalyzer;
pub use gateways::GatewayAnalyzer;
