pub mod in_memory_rate_limiter;
