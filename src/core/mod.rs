// Core modules implementing the value model, conversion, and error modeling.
pub mod convert;
pub mod error;
pub mod shape;
pub mod value;
