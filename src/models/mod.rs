mod food;

pub use food::FoodItem;
