pub mod check_ops;
pub mod convert_ops;
