pub mod error;
pub mod hash;
pub mod index;
pub mod node;
pub mod options;
pub mod proof;
pub mod tree;
