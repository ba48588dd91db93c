mod catalog_tests;
mod inventory_json_tests;
