mod check_config;
mod fetch;
mod plan;

pub use check_config::check_config;
pub use fetch::fetch;
pub use plan::{plan, PlanArgs};
