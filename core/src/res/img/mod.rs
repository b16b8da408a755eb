pub mod dorian;
