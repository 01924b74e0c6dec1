mod drink;
mod patron;
