pub mod color;
pub mod pixel_buffer;
pub mod transforms;
