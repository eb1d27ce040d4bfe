pub mod arithmetic;
pub mod calculator;
pub mod converter;
pub mod history;
pub mod validator;
