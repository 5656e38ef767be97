pub mod a001_carpet;
