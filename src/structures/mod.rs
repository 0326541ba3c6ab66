pub mod euclid;
pub mod factors;
pub mod gf;
pub mod irreducible;
pub mod poly;
pub mod primitive;
pub mod value;
pub mod zp;
