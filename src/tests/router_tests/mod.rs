mod compare_tests;
mod download_tests;
