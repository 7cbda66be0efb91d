mod invocations;

pub use invocations::call_tools;
