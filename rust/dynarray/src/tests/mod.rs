mod drop_tests;
