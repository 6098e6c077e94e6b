pub mod build_grid;
