pub mod activation;
pub mod arithmetic;
