pub mod featured;
