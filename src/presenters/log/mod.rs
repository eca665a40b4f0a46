pub mod tracing_presenter;
