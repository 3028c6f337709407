pub mod augment_shopping_list;
