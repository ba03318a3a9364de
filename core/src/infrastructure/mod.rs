pub mod nutrition;
