mod selection_type_builder_tests;
