pub mod search_view;
