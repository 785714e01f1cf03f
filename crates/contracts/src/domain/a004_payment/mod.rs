pub mod aggregate;

pub use aggregate::{CreatePaymentDto, Payment, PaymentMethod, PaymentStatus};
