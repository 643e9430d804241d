mod array;
mod inner;
mod shift;
mod shrink;

pub use array::ArrayList;
pub use shrink::calc_capacity;
