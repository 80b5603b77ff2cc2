pub mod charset;
pub mod image;
pub mod msg;
pub mod region;
pub mod rom;
pub mod simple;
pub mod string_table;
pub mod table;

#[cfg(target_endian = "big")]
compile_error!("Big endian architectures are not currently supported");
