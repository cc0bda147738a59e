pub mod chart_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod scheme_ops;
