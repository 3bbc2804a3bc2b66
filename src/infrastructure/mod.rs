pub mod in_memory;
pub mod tracing_sink;
