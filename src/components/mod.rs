pub mod animated_number;
pub mod cta;
pub mod estimator;
pub mod nav;
pub mod plans;
pub mod reveal;
