pub mod cache_control;
