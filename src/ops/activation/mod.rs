mod relu;

pub use relu::relu;
