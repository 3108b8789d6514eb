mod linear_2d;

pub use linear_2d::Linear2D;
