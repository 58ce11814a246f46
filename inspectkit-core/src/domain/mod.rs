pub mod envelope;
pub mod invocation;
pub mod types;

pub use envelope::Envelope;
pub use invocation::{ErrorKind, InvocationError, InvocationOutput, InvocationResult};
pub use types::{Method, Target, TargetError};
