pub mod a001_bank;
