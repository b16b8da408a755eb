pub mod img;
