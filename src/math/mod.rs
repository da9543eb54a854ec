pub mod field;
pub mod poly;
pub mod prime;

pub use self::{field::PrimeField, poly::Polynomial};
