mod aggregation;
mod food;
mod goal;
mod nutrient;
mod plan;
mod unit;

pub use aggregation::*;
pub use food::*;
pub use goal::*;
pub use nutrient::*;
pub use plan::*;
pub use unit::*;
