pub mod simple_query_map;
