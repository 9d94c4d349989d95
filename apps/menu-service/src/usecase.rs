//! # ユースケース

pub mod drink;

pub use drink::DrinkUseCaseImpl;
