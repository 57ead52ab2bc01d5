pub mod encoded;
pub mod source;
