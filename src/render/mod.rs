/// Module containing the pure frame formatting
pub mod frame;
/// Module containing the gauge arithmetic
pub mod gauge;
/// Module containing the renderer that paints frames onto a terminal
pub mod terminal;

#[cfg(test)]
mod frame_test;
