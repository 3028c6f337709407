pub mod get_diet_options;
