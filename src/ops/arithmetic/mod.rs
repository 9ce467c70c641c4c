// Primitive operations carry their own gradient rule; the derived ones
// (neg, sub, div) are compositions of the primitives, so their gradients
// are correct by construction.
mod add;
mod div;
mod mul;
mod neg;
mod pow;
mod sub;

pub use add::add;
pub use div::div;
pub use mul::mul;
pub use neg::neg;
pub use pow::pow;
pub use sub::sub;
