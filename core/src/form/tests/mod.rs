mod submit_tests;
