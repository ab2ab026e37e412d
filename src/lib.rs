pub mod array;
pub mod dims;
pub mod gameboard;
