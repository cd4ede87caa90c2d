pub mod fm;
pub mod ranked;
pub mod registry;
pub mod rotation;
