mod str_query_token_source_tests;
