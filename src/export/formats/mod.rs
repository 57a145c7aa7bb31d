pub mod cdr3;
