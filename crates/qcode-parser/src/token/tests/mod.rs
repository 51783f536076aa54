mod query_token_tests;
