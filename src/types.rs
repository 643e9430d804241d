mod errors;
mod len_type;

pub use errors::*;
pub use len_type::LengthType;
