pub mod generate_map;
